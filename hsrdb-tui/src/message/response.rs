//! 后台响应消息
//!
//! backend 层完成异步请求后，把结果包成 `ResponseMessage` 投回主循环。
//! 每条携带发起时领取的令牌；Update 层只提交令牌仍然有效的响应。
//! 错误在发送前已降级为展示用的字符串，主循环不需要区分错误类别。

use hsrdb_core::types::{Domain, DomainDetail, DomainPage, Facets, Stats, TermReply};
use hsrdb_core::RequestToken;

/// 后台响应消息
#[derive(Debug, Clone)]
pub enum ResponseMessage {
    /// 检索结果
    Search {
        domain: Domain,
        token: RequestToken,
        result: Result<DomainPage, String>,
    },
    /// 详情结果
    Detail {
        domain: Domain,
        token: RequestToken,
        result: Result<DomainDetail, String>,
    },
    /// 词条解释结果
    Term {
        token: RequestToken,
        result: Result<TermReply, String>,
    },
    /// 筛选取值列表（无令牌：结果只会变新不会变错）
    Facets {
        domain: Domain,
        result: Result<Facets, String>,
    },
    /// 数据集统计
    Stats {
        token: RequestToken,
        result: Result<Stats, String>,
    },
}
