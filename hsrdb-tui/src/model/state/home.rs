//! 首页状态

use hsrdb_core::types::Stats;
use hsrdb_core::RequestSeq;

/// 首页数据状态（统计横幅）
#[derive(Debug, Default)]
pub struct HomeState {
    /// 数据集统计（None 表示尚未加载）
    pub stats: Option<Stats>,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    /// 请求序号
    pub seq: RequestSeq,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }
}
