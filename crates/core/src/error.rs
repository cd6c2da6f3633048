use std::io;
use std::path::PathBuf;

/// Failures of a single export run.
///
/// The `Display` text of each variant is the diagnostic shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("错误: 文件未找到。\n请确保 'data.json' 存在于以下目录中: {}", .dir.display())]
    NotFound { dir: PathBuf },

    #[error("错误: 无法解析 '{}'。请检查文件内容是否为有效JSON。", .path.display())]
    Parse { path: PathBuf, detail: String },

    #[error("发生了一个未知错误: {source}")]
    Unknown {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("数据中没有找到作者信息。")]
    NoData,

    #[error("错误：未能在数据中找到该作者的条目。")]
    EmptyFilter { author: String },

    #[error("保存文件时出错: {source}\n目标路径: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("读取输入时出错: {0}")]
    Console(#[source] io::Error),
}

impl ExportError {
    /// Whether the run should terminate abnormally instead of just reporting.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExportError::Console(_))
    }
}

/// Raised when filtered records cannot be put in timestamp order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("timestamp at position {index} cannot be ordered: {value:?}")]
pub struct UnorderedTimestamps {
    pub index: usize,
    pub value: String,
}
