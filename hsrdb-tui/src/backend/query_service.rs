//! 查询服务
//!
//! Update 层返回的 Command 在这里落地：每条命令在 tokio 运行时上
//! 生成一个异步任务，完成后把 `ResponseMessage` 投进无界通道。
//! 主循环每个 tick 用 `try_recv` 把已完成的响应取出来喂回 Update。
//!
//! 请求不做取消：过期响应照常回流，由 Update 层凭令牌丢弃。

use std::sync::Arc;

use anyhow::Result;
use hsrdb_core::{ApiConfig, QueryClient};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::config_service::{AppConfig, LocalConfigService};
use crate::message::{Command, ResponseMessage};

/// 词条解释的候选条数
const TERM_LIMIT: u32 = 5;

/// 查询服务
pub struct QueryService {
    runtime: Runtime,
    client: Arc<QueryClient>,
    tx: UnboundedSender<ResponseMessage>,
    rx: UnboundedReceiver<ResponseMessage>,
    config_service: LocalConfigService,
}

impl QueryService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let client = Arc::new(QueryClient::new(&ApiConfig {
            base_url: config.api_base.clone(),
            ..ApiConfig::default()
        })?);
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            runtime,
            client,
            tx,
            rx,
            config_service: LocalConfigService,
        })
    }

    /// 执行一批命令
    pub fn dispatch_all(&self, commands: Vec<Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// 执行单条命令
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::Search {
                domain,
                query,
                token,
            } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .search(domain, &query)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(ResponseMessage::Search {
                        domain,
                        token,
                        result,
                    });
                });
            }

            Command::Detail {
                domain,
                key,
                lang,
                page_size,
                token,
            } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .detail(domain, key, lang, page_size)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(ResponseMessage::Detail {
                        domain,
                        token,
                        result,
                    });
                });
            }

            Command::Term {
                term,
                lang,
                domain,
                token,
            } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .explain_term(&term, lang, TERM_LIMIT, Some(domain))
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send(ResponseMessage::Term { token, result });
                });
            }

            Command::Facets { domain } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client.facets(domain).await.map_err(|e| e.to_string());
                    let _ = tx.send(ResponseMessage::Facets { domain, result });
                });
            }

            Command::Stats { token } => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client.stats().await.map_err(|e| e.to_string());
                    let _ = tx.send(ResponseMessage::Stats { token, result });
                });
            }

            Command::SaveConfig(config) => {
                // 同步写文件，失败只记日志，不打断交互
                if let Err(e) = self.config_service.save(&config) {
                    log::warn!("保存配置失败: {e:#}");
                }
            }
        }
    }

    /// 取出一条已完成的响应（非阻塞）
    pub fn try_recv(&mut self) -> Option<ResponseMessage> {
        self.rx.try_recv().ok()
    }
}
