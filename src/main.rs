use anyhow::Result;
use tracing::info;

use rent_agreement_desk::app::AppContext;
use rent_agreement_desk::config::Config;
use rent_agreement_desk::i18n::coverage_report;
use rent_agreement_desk::render::{Document, MetaField, TextNode};

/// The landing page's translatable nodes, as the markup declares them.
fn landing_document() -> Document {
    let mut doc = Document::new(vec![
        TextNode::bilingual(
            "hero-heading",
            "Rent Agreement in Minutes",
            "मिनिटांत भाडे करार",
        ),
        TextNode::bilingual(
            "hero-sub",
            "Government-registered agreements, delivered to your door",
            "सरकारी नोंदणीकृत करार, तुमच्या दारापर्यंत",
        ),
        TextNode::bilingual("cta-create", "Create Agreement", "करार तयार करा")
            .with_children(vec!["fas fa-file-contract".to_string()]),
        TextNode::bilingual("calc-heading", "Calculate Charges", "शुल्क मोजा"),
        TextNode::bilingual("submit-label", "Calculate", "मोजा").replace_all(),
    ]);

    doc.title = Some(MetaField::bilingual(
        "Rent Agreement Services",
        "भाडे करार सेवा",
    ));
    doc.meta_description = Some(MetaField::bilingual(
        "Online rent agreement registration with home visit",
        "घरपोच भेटीसह ऑनलाइन भाडे करार नोंदणी",
    ));
    doc
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rent_agreement_desk=info".parse()?),
        )
        .init();

    info!("Starting rent agreement desk");

    // Load configuration and persisted preferences
    let config = Config::from_env()?;
    let ctx = AppContext::new(config);

    // Render the landing page in the saved language
    let mut document = landing_document();
    let menu = ctx.render_page(&mut document, "index.html", "");

    if let Some(title) = &document.title {
        info!("Page title: {}", title.value);
    }
    for entry in &menu {
        info!(
            "Menu: {} -> {}{}",
            entry.label,
            entry.link,
            if entry.active { " (active)" } else { "" }
        );
    }

    // Surface translation gaps for content authors
    let coverage = coverage_report(&document);
    if coverage.is_complete() {
        info!("Translation coverage: complete ({} nodes)", coverage.total_nodes);
    } else {
        info!(
            "Translation coverage: {} gaps across {} nodes (en: {:?}, mr: {:?})",
            coverage.gap_count(),
            coverage.total_nodes,
            coverage.missing_en,
            coverage.missing_mr
        );
    }

    info!("Ready");
    Ok(())
}
