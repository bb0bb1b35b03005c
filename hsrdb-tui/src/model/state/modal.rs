//! 弹窗/对话框状态

use hsrdb_core::types::{Domain, TermReply};

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 词条解释弹窗
    TermLookup {
        /// 被查询的词条文本
        term: String,
        /// 发起查询的数据域（限定检索范围）
        domain: Domain,
        /// 查询结果（None 表示仍在加载）
        reply: Option<TermReply>,
        /// 是否正在查询
        loading: bool,
        /// 错误信息
        error: Option<String>,
    },
    /// 页码跳转输入框
    PageJump {
        /// 已输入的页码（只接受 ASCII 数字）
        input: String,
    },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示词条解释弹窗（初始为加载状态）
    pub fn show_term_lookup(&mut self, term: &str, domain: Domain) {
        self.active = Some(Modal::TermLookup {
            term: term.to_string(),
            domain,
            reply: None,
            loading: true,
            error: None,
        });
    }

    /// 显示页码跳转弹窗
    pub fn show_page_jump(&mut self) {
        self.active = Some(Modal::PageJump {
            input: String::new(),
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
