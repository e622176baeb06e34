// Built-in catalog shown by the demo window
use catalog_nav::catalog::CatalogItem;

pub fn items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Agentic Chat Copilot", "2025-02-10")
            .with_excerpt("Multi-agent assistant grounded on enterprise documents.")
            .with_field("productsAndServices", &["Azure OpenAI", "Azure AI Search"])
            .with_field("industries", &["Retail", "Financial Services"])
            .with_field("programmingLanguages", &["Python"]),
        CatalogItem::new("Document Intelligence Pipeline", "2024-09-18")
            .with_excerpt("Extracts fields from forms and invoices at scale.")
            .with_field("productsAndServices", &["Document Intelligence", "Azure Functions"])
            .with_field("industries", &["Financial Services", "Public Sector"])
            .with_field("programmingLanguages", &["C#"]),
        CatalogItem::new("Call Center Analytics", "2024-05-02")
            .with_excerpt("Transcribes and summarises support calls.")
            .with_field("productsAndServices", &["Azure AI Speech", "Azure OpenAI"])
            .with_field("industries", &["Telecommunications", "Retail"])
            .with_field("programmingLanguages", &["Python", "TypeScript"]),
        CatalogItem::new("Clinical Notes Summariser", "2025-06-21")
            .with_excerpt("Drafts discharge summaries from clinician notes.")
            .with_field("productsAndServices", &["Azure OpenAI"])
            .with_field("industries", &["Health Care"])
            .with_field("programmingLanguages", &["Python"]),
        CatalogItem::new("Vector Search Starter", "2023-12-04")
            .with_excerpt("Hybrid keyword and vector retrieval over product catalogs.")
            .with_field("productsAndServices", &["Azure AI Search", "Cosmos DB"])
            .with_field("industries", &["Retail", "Manufacturing"])
            .with_field("programmingLanguages", &["TypeScript", "C#"]),
        CatalogItem::new("Predictive Maintenance", "2024-01-27")
            .with_excerpt("Flags failing equipment from sensor telemetry.")
            .with_field("productsAndServices", &["Azure Machine Learning", "Event Hubs"])
            .with_field("industries", &["Manufacturing", "Energy"])
            .with_field("programmingLanguages", &["Python"]),
        CatalogItem::new("Contract Review Assistant", "2025-04-14")
            .with_excerpt("Highlights risky clauses and missing terms.")
            .with_field("productsAndServices", &["Azure OpenAI", "Document Intelligence"])
            .with_field("industries", &["Legal", "Public Sector"])
            .with_field("programmingLanguages", &["C#", "Python"]),
        CatalogItem::new("Retail Shelf Vision", "2023-08-30")
            .with_excerpt("Detects out-of-stock shelves from store cameras.")
            .with_field("productsAndServices", &["Azure AI Vision"])
            .with_field("industries", &["Retail"])
            .with_field("programmingLanguages", &["Python", "C++"]),
    ]
}

pub const DIFFERENTIATORS: &[(&str, &str)] = &[
    ("Production ready", "Every accelerator ships with infrastructure templates and CI."),
    ("Secure by default", "Managed identities, private networking and content filtering."),
    ("Extensible", "Swap models, data sources and front ends without a rewrite."),
];

pub const STEPS: &[&str] = &[
    "Pick an accelerator that matches your scenario.",
    "Deploy it to your subscription with one command.",
    "Point it at your own data and customise the prompts.",
    "Promote it to production with the included pipelines.",
];

pub const QUOTES: &[(&str, &str)] = &[
    ("We went from idea to pilot in two weeks.", "Platform lead, retail"),
    ("The deployment templates saved us a quarter of work.", "CTO, insurance"),
];
