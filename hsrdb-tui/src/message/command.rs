//! 后台命令
//!
//! Update 层处理消息后返回的副作用描述。主循环把它们交给 backend 层
//! 异步执行，执行结果以 `ResponseMessage` 回流。Update 本身不碰网络，
//! 因此状态机可以在同步测试里完整驱动。

use hsrdb_core::types::{DetailKey, Domain, SearchQuery};
use hsrdb_core::{Lang, RequestToken};

use crate::backend::AppConfig;

/// 后台命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 执行一次检索
    Search {
        domain: Domain,
        query: SearchQuery,
        token: RequestToken,
    },
    /// 加载一条详情
    Detail {
        domain: Domain,
        key: DetailKey,
        lang: Lang,
        page_size: u32,
        token: RequestToken,
    },
    /// 查询词条解释
    Term {
        term: String,
        lang: Lang,
        domain: Domain,
        token: RequestToken,
    },
    /// 加载筛选取值列表
    Facets { domain: Domain },
    /// 加载数据集统计
    Stats { token: RequestToken },
    /// 持久化配置
    SaveConfig(AppConfig),
}
