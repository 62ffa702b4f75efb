use super::domain::FinancialProduct;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv output: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 9] = [
    "id",
    "name",
    "provider",
    "type",
    "apr",
    "match_score",
    "match_band",
    "features",
    "description",
];

/// Writes one row per product, preserving the order of `products`.
pub fn write_csv<W: Write>(products: &[FinancialProduct], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for product in products {
        let score = product.match_score.value().to_string();
        let features = product.features.join("; ");
        csv_writer.write_record([
            product.id.as_str(),
            product.name.as_str(),
            product.provider.as_str(),
            product.product_type.key(),
            product.apr.as_str(),
            score.as_str(),
            product.band().label(),
            features.as_str(),
            product.description.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
