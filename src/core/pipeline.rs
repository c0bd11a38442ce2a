use crate::core::geo::GeoFilter;
use crate::core::parser::LineParser;
use crate::core::projector::project_and_sort;
use crate::domain::model::{CustomerRecord, FilterOutcome, ReferencePoint, ResultRecord, RunStats};
use crate::utils::error::Result;
use std::io::BufRead;

/// 解析 → 距離篩選 → 投影排序，單次同步執行。
///
/// 只要有一行解析失敗，整個呼叫就失敗，不會回傳部分結果。
#[derive(Debug, Clone, Copy, Default)]
pub struct GeofilterPipeline {
    filter: GeoFilter,
}

impl GeofilterPipeline {
    pub fn new(reference: ReferencePoint) -> Self {
        Self {
            filter: GeoFilter::new(reference),
        }
    }

    /// 讀取端以值傳入，函式結束時（不論成功或失敗）即被釋放
    pub fn run<R: BufRead>(&self, reader: R) -> Result<FilterOutcome> {
        let mut parser = LineParser::new(reader);
        let mut retained: Vec<CustomerRecord> = Vec::new();
        let mut records_parsed = 0;

        for record in parser.by_ref() {
            let record = record?;
            records_parsed += 1;

            if self.filter.retains(&record) {
                retained.push(CustomerRecord::from(&record));
            }
        }

        let stats = RunStats {
            lines_read: parser.lines_read(),
            blank_lines: parser.blank_lines(),
            records_parsed,
            records_retained: retained.len(),
        };
        tracing::debug!(
            "Parsed {} records ({} blank lines skipped), {} within {} km",
            stats.records_parsed,
            stats.blank_lines,
            stats.records_retained,
            self.filter.reference().radius_km
        );

        Ok(FilterOutcome {
            customers: project_and_sort(retained),
            stats,
        })
    }
}

/// 核心邊界：給定串流與參考點，回傳排序後的結果
pub fn filter_customers<R: BufRead>(
    reader: R,
    reference: &ReferencePoint,
) -> Result<Vec<ResultRecord>> {
    GeofilterPipeline::new(*reference)
        .run(reader)
        .map(|outcome| outcome.customers)
}
