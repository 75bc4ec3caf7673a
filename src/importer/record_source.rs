// ==========================================
// 矿区运输路线调度系统 - 记录源实现
// ==========================================
// 职责: 读取道路状况记录 (Excel .xlsx/.xls / CSV .csv)
// 约定: max_rows 仅限制保留行数, 底层数据源必须消费完毕,
//       保证读取操作总能正常结束, 不遗留未消费的句柄
// ==========================================

use crate::domain::road::{RawRecord, RecordBatch};
use crate::importer::error::{ImportError, ImportResult};
use async_trait::async_trait;
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

// ==========================================
// RecordSource Trait
// ==========================================
// 用途: 记录读取主接口（管线唯一的 I/O 挂起点）
// 实现者: CsvRecordSource, ExcelRecordSource, UniversalRecordSource
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// 读取记录批次
    ///
    /// # 参数
    /// - `path`: 数据源文件路径
    /// - `max_rows`: 保留行数上限（None 表示不限）
    ///
    /// # 返回
    /// - Ok(RecordBatch): 列名集合 + 保留的记录；零行时列名为空
    /// - Err(ImportError::FileNotFound): 路径不存在
    /// - Err: 内容格式错误
    async fn read_records(&self, path: &Path, max_rows: Option<usize>)
        -> ImportResult<RecordBatch>;
}

// ==========================================
// CSV 记录源
// ==========================================
pub struct CsvRecordSource;

impl CsvRecordSource {
    fn read_sync(path: &Path, max_rows: Option<usize>) -> ImportResult<RecordBatch> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行; 超出上限的行仍然消费, 只是不保留
        let mut rows: Vec<RawRecord> = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = RawRecord::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            if max_rows.map_or(true, |cap| rows.len() < cap) {
                rows.push(row_map);
            }
        }

        Ok(batch_from(headers, rows))
    }
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    async fn read_records(
        &self,
        path: &Path,
        max_rows: Option<usize>,
    ) -> ImportResult<RecordBatch> {
        let path: PathBuf = path.to_path_buf();
        spawn_parse(move || Self::read_sync(&path, max_rows)).await
    }
}

// ==========================================
// Excel 记录源
// ==========================================
pub struct ExcelRecordSource;

impl ExcelRecordSource {
    fn read_sync(path: &Path, max_rows: Option<usize>) -> ImportResult<RecordBatch> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        // 打开 Excel 文件
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 提取表头（第一行）
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // 读取数据行; 超出上限的行不保留
        let mut rows: Vec<RawRecord> = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = RawRecord::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            if max_rows.map_or(true, |cap| rows.len() < cap) {
                rows.push(row_map);
            }
        }

        Ok(batch_from(headers, rows))
    }
}

#[async_trait]
impl RecordSource for ExcelRecordSource {
    async fn read_records(
        &self,
        path: &Path,
        max_rows: Option<usize>,
    ) -> ImportResult<RecordBatch> {
        let path: PathBuf = path.to_path_buf();
        spawn_parse(move || Self::read_sync(&path, max_rows)).await
    }
}

// ==========================================
// 通用记录源（根据扩展名自动选择）
// ==========================================
pub struct UniversalRecordSource;

#[async_trait]
impl RecordSource for UniversalRecordSource {
    async fn read_records(
        &self,
        path: &Path,
        max_rows: Option<usize>,
    ) -> ImportResult<RecordBatch> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvRecordSource.read_records(path, max_rows).await,
            "xlsx" | "xls" => ExcelRecordSource.read_records(path, max_rows).await,
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

// ==========================================
// 内部工具
// ==========================================

/// 零保留行时列名为空
fn batch_from(headers: Vec<String>, rows: Vec<RawRecord>) -> RecordBatch {
    let columns = if rows.is_empty() { Vec::new() } else { headers };
    RecordBatch { columns, rows }
}

/// 将同步解析桥接到 tokio 阻塞线程池
async fn spawn_parse<F>(parse: F) -> ImportResult<RecordBatch>
where
    F: FnOnce() -> ImportResult<RecordBatch> + Send + 'static,
{
    tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| ImportError::InternalError(format!("解析任务中断: {e}")))?
}
