use crate::domain::model::RawRecord;
use crate::utils::error::{GeofilterError, Result};
use std::collections::HashMap;
use std::io::{BufRead, Lines};

/// 逐行解析 JSON Lines 串流。
///
/// 空白行直接略過；遇到第一個無法解析的行就回傳 `ParseError`，之後不再產出任何項目。
/// 讀取錯誤（含非 UTF-8 內容）以 `IoError` 回報，同樣終止迭代。
pub struct LineParser<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    blank_lines: usize,
    finished: bool,
}

impl<R: BufRead> LineParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            blank_lines: 0,
            finished: false,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    pub fn blank_lines(&self) -> usize {
        self.blank_lines
    }

    fn fail(&mut self, err: GeofilterError) -> Option<Result<RawRecord>> {
        self.finished = true;
        Some(Err(err))
    }
}

/// 只把 ASCII 空白（含 \x0b）視為空白，全形空白等字元交給 JSON 解析處理
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_ascii_whitespace() || c == '\x0b')
}

/// 解析單一行；必須是 JSON 物件
pub fn parse_line(line: &str, line_number: usize) -> Result<RawRecord> {
    serde_json::from_str::<HashMap<String, serde_json::Value>>(line)
        .map(|data| RawRecord { data })
        .map_err(|source| GeofilterError::ParseError {
            line: line_number,
            source,
        })
}

impl<R: BufRead> Iterator for LineParser<R> {
    type Item = Result<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                None => {
                    self.finished = true;
                    return None;
                }
                Some(Err(e)) => return self.fail(GeofilterError::IoError(e)),
                Some(Ok(line)) => line,
            };
            self.line_number += 1;

            if is_blank(&line) {
                self.blank_lines += 1;
                continue;
            }

            return match parse_line(&line, self.line_number) {
                Ok(record) => Some(Ok(record)),
                Err(e) => {
                    tracing::debug!("Stopping at line {}: {}", self.line_number, e);
                    self.fail(e)
                }
            };
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineParser<R> {}
