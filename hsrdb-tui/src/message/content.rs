//! 内容面板消息
//!
//! 检索页与设置页中的操作：输入关键词、翻页、打开详情、查词条等。

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 关键词输入 ==========
    /// 输入字符
    InputChar(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 清空输入框
    ClearQuery,
    /// 提交检索
    Submit,

    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 分页 ==========
    /// 下一页
    NextPage,
    /// 上一页
    PrevPage,
    /// 第一页
    FirstPage,
    /// 最后一页
    LastPage,
    /// 打开页码跳转弹窗
    OpenJump,

    // ========== 详情与词条 ==========
    /// 打开选中条目的详情
    OpenDetail,
    /// 查询选中条目中的下一个词条（循环）
    LookupTerm,
    /// 详情面板向上滚动
    ScrollUp,
    /// 详情面板向下滚动
    ScrollDown,

    // ========== 筛选 ==========
    /// 循环切换第 N 个筛选键的取值（item/monster 域）
    CycleFacet(u8),

    // ========== 设置页面专用 ==========
    /// 切换到上一个值（用于设置项）
    TogglePrev,
    /// 切换到下一个值（用于设置项）
    ToggleNext,
}
