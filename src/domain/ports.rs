use crate::domain::model::{OutputFormat, ReferencePoint};
use crate::utils::error::Result;
use std::io::BufRead;

pub trait Storage {
    /// 開啟輸入串流；回傳值被 drop 時即釋放底層資源
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    /// None 代表輸出到 stdout
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    fn pretty(&self) -> bool;
    fn reference_point(&self) -> ReferencePoint;
}
