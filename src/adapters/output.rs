pub use crate::domain::model::OutputFormat;

use crate::domain::model::ResultRecord;
use crate::utils::error::{GeofilterError, Result};
use std::io::Write;

pub fn render(customers: &[ResultRecord], format: OutputFormat, pretty: bool) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => render_json(customers, pretty),
        OutputFormat::Jsonl => render_json_lines(customers),
        OutputFormat::Csv => render_csv(customers),
    }
}

fn render_json(customers: &[ResultRecord], pretty: bool) -> Result<Vec<u8>> {
    let mut data = if pretty {
        serde_json::to_vec_pretty(customers)?
    } else {
        serde_json::to_vec(customers)?
    };
    data.push(b'\n');
    Ok(data)
}

fn render_json_lines(customers: &[ResultRecord]) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    for customer in customers {
        serde_json::to_writer(&mut data, customer)?;
        data.write_all(b"\n")?;
    }
    Ok(data)
}

fn render_csv(customers: &[ResultRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // 空結果也要輸出表頭
    writer.write_record(["id", "name"])?;
    for customer in customers {
        writer.write_record([customer.id.to_string(), customer.name.clone()])?;
    }
    writer
        .into_inner()
        .map_err(|e| GeofilterError::IoError(e.into_error()))
}
