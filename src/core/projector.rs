use crate::domain::model::{CustomerRecord, ResultRecord};

impl From<CustomerRecord> for ResultRecord {
    fn from(customer: CustomerRecord) -> Self {
        ResultRecord {
            id: customer.id,
            name: customer.name,
        }
    }
}

/// 只保留 id 與 name，依 id 遞增排序。
///
/// `sort_by_key` 是穩定排序，id 相同時維持輸入順序。
pub fn project_and_sort<I>(customers: I) -> Vec<ResultRecord>
where
    I: IntoIterator<Item = CustomerRecord>,
{
    let mut projected: Vec<ResultRecord> =
        customers.into_iter().map(ResultRecord::from).collect();
    projected.sort_by_key(|record| record.id);
    projected
}
