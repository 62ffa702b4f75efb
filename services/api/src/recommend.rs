use chrono::Local;
use clap::{Args, ValueEnum};
use product_matcher::config::AppConfig;
use product_matcher::error::AppError;
use product_matcher::recommendations::{
    write_csv, DashboardTab, RecommendationEngine, RecommendationReport, RecommendationSettings,
    UserProfile,
};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Income bracket key, e.g. 50k-75k or over-150k
    #[arg(long, default_value = "")]
    pub(crate) income: String,
    /// Credit score bracket key, e.g. fair or very-good
    #[arg(long, default_value = "")]
    pub(crate) credit_score: String,
    /// Employment status key, e.g. full-time or student
    #[arg(long, default_value = "")]
    pub(crate) employment: String,
    /// Home address; only the city/state portion is displayed
    #[arg(long, default_value = "")]
    pub(crate) address: String,
    /// Dashboard tab: all or one of the five product types
    #[arg(long, default_value = "all")]
    pub(crate) tab: String,
    /// Number of products on the "all" tab (defaults to MATCHER_TOP_PICKS)
    #[arg(long)]
    pub(crate) top_picks: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        income,
        credit_score,
        employment,
        address,
        tab,
        top_picks,
        format,
    } = args;

    let config = AppConfig::load()?;
    let settings = RecommendationSettings {
        top_picks: top_picks
            .filter(|count| *count > 0)
            .unwrap_or(config.recommendations.top_picks),
    };

    let profile = UserProfile::from_raw(&income, &credit_score, &employment, &address);
    let engine = RecommendationEngine::new(settings);
    let report = engine.recommend(&profile, &DashboardTab::parse(&tab));

    let stdout = std::io::stdout();
    write_report(&report, format, stdout.lock())
}

pub(crate) fn write_report<W: Write>(
    report: &RecommendationReport,
    format: OutputFormat,
    mut out: W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => render_report(report, &mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let products: Vec<_> = report
                .view
                .products
                .iter()
                .map(|view| view.product.clone())
                .collect();
            write_csv(&products, out)?;
        }
    }

    Ok(())
}

fn render_report<W: Write>(report: &RecommendationReport, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Product recommendations")?;
    writeln!(
        out,
        "Catalog {} | generated {}",
        report.catalog_version,
        Local::now().date_naive()
    )?;

    writeln!(out, "\nYour financial profile")?;
    writeln!(out, "- Income: {}", report.summary.income.unwrap_or("not provided"))?;
    writeln!(out, "- Credit score: {}", report.summary.credit_score)?;
    writeln!(
        out,
        "- Employment: {}",
        report.summary.employment.as_deref().unwrap_or("not provided")
    )?;
    writeln!(
        out,
        "- Location: {}",
        report.summary.location.as_deref().unwrap_or("not provided")
    )?;
    if !report.completeness.complete {
        writeln!(out, "Incomplete onboarding:")?;
        for field in &report.completeness.missing {
            writeln!(out, "  - {:?} (step {})", field, field.onboarding_step())?;
        }
    }
    writeln!(out, "Banking tier: {}", report.banking_tier.label())?;

    writeln!(out, "\n{}", report.view.label)?;
    if report.view.products.is_empty() {
        writeln!(out, "No products in this tab")?;
        return Ok(());
    }
    for (index, view) in report.view.products.iter().enumerate() {
        let product = &view.product;
        writeln!(
            out,
            "{:>2}. {} ({}) | {} | {} [{}]",
            index + 1,
            product.name,
            product.provider,
            product.apr,
            product.match_score,
            view.match_band.label()
        )?;
        writeln!(out, "    {}", product.description)?;
        for feature in &product.features {
            writeln!(out, "    {}", feature)?;
        }
    }
    Ok(())
}
