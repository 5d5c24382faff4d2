//! Example inputs for demonstrating the parser.
//!
//! The catalog is static data. Each case records how many widget (non-text)
//! nodes its input should produce.

use std::fmt;

use tagmark::{Limits, MarkupError, Node, try_parse};

/// Grouping of catalog cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// One widget kind per case.
    Basic,
    /// Realistic screens mixing widgets and prose.
    Complex,
    /// Boundary inputs.
    Edge,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Basic, Category::Complex, Category::Edge];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Basic => "basic",
            Category::Complex => "complex",
            Category::Edge => "edge",
        })
    }
}

/// A named example input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Case {
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub input: &'static str,
    /// Number of non-text nodes `input` parses to.
    pub expected_widgets: usize,
}

/// Outcome of parsing a [`Case`].
#[derive(Clone, Debug, PartialEq)]
pub struct CaseReport {
    pub nodes: Vec<Node>,
    pub widgets: usize,
    pub expected: usize,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.widgets == self.expected
    }
}

impl Case {
    /// Parse the input and compare the widget count with the expectation.
    pub fn run(&self, limits: &Limits) -> Result<CaseReport, MarkupError> {
        let nodes = try_parse(self.input, limits)?;
        let widgets = nodes.iter().filter(|n| !n.is_text()).count();
        Ok(CaseReport {
            nodes,
            widgets,
            expected: self.expected_widgets,
        })
    }
}

const fn case(
    name: &'static str,
    category: Category,
    description: &'static str,
    input: &'static str,
    expected_widgets: usize,
) -> Case {
    Case {
        name,
        category,
        description,
        input,
        expected_widgets,
    }
}

static CASES: &[Case] = &[
    // Basic
    case(
        "buttons",
        Category::Basic,
        "Every button type",
        r#"[button]默认按钮[/button]
[button type="primary"]主要按钮[/button]
[button type="success"]成功按钮[/button]
[button type="warning"]警告按钮[/button]
[button type="danger"]危险按钮[/button]
[button type="info"]信息按钮[/button]"#,
        6,
    ),
    case(
        "tags",
        Category::Basic,
        "Every tag type",
        r#"[tag]默认标签[/tag]
[tag type="success"]成功[/tag]
[tag type="info"]信息[/tag]
[tag type="warning"]警告[/tag]
[tag type="danger"]危险[/tag]"#,
        5,
    ),
    case(
        "links",
        Category::Basic,
        "Links with and without a type",
        r#"[link href="https://www.baidu.com"]百度[/link]
[link href="https://www.google.com" type="success"]Google[/link]
[link href="https://github.com" type="warning"]GitHub[/link]"#,
        3,
    ),
    case(
        "inputs",
        Category::Basic,
        "Self-closing text inputs",
        r#"[input placeholder="请输入用户名"/]
[input placeholder="请输入密码" type="password"/]
[input placeholder="请输入邮箱"/]"#,
        3,
    ),
    case(
        "selects",
        Category::Basic,
        "Selects with comma-separated options",
        r#"[select options="北京,上海,广州,深圳" placeholder="请选择城市"/]
[select options="男,女" placeholder="请选择性别"/]
[select options="1-10岁,11-20岁,21-30岁,31岁以上" placeholder="请选择年龄段"/]"#,
        3,
    ),
    case(
        "switches",
        Category::Basic,
        "Bare switches",
        "[switch/]\n[switch/]\n[switch/]",
        3,
    ),
    case(
        "alerts",
        Category::Basic,
        "Alerts with type and title",
        r#"[alert type="success" title="成功"]操作成功完成！[/alert]
[alert type="warning" title="警告"]请注意数据安全！[/alert]
[alert type="info" title="提示"]这是一条提示信息[/alert]
[alert type="error" title="错误"]发生了一个错误！[/alert]"#,
        4,
    ),
    case(
        "progress",
        Category::Basic,
        "Progress bars from empty to full",
        r#"[progress percentage="0"/]
[progress percentage="25"/]
[progress percentage="50"/]
[progress percentage="75"/]
[progress percentage="100" status="success"/]"#,
        5,
    ),
    case(
        "badges",
        Category::Basic,
        "Badges with numeric and text values",
        r#"[badge value="3"]消息[/badge]
[badge value="12"]通知[/badge]
[badge value="99+"]邮件[/badge]"#,
        3,
    ),
    case(
        "dialogs",
        Category::Basic,
        "Dialogs with a title",
        r#"[dialog title="提示"]这是一个简单的提示对话框[/dialog]
[dialog title="确认删除"]确定要删除这条记录吗？此操作不可恢复。[/dialog]"#,
        2,
    ),
    // Complex
    case(
        "login-form",
        Category::Complex,
        "A complete login form",
        r#"请输入登录信息：
[input placeholder="用户名"/]
[input placeholder="密码" type="password"/]
[switch/] 记住我
[button type="primary"]登录[/button]
[link href="/register"]还没有账号？立即注册[/link]"#,
        5,
    ),
    case(
        "profile-card",
        Category::Complex,
        "A user profile card",
        r#"用户信息
[tag type="success"]已认证[/tag]
[badge value="VIP"]会员等级[/badge]
[progress percentage="80"/] 经验值
[button type="primary"]编辑资料[/button]
[button]退出登录[/button]"#,
        5,
    ),
    case(
        "confirm-action",
        Category::Complex,
        "Confirming a destructive action",
        r#"[alert type="warning" title="警告"]您即将执行危险操作！[/alert]
[dialog title="确认操作"]确定要继续吗？此操作不可撤销。[/dialog]
[button type="danger"]确认删除[/button]
[button]取消[/button]"#,
        4,
    ),
    case(
        "settings",
        Category::Complex,
        "A settings page",
        r#"系统设置
[switch/] 开启通知
[switch/] 深色模式
[switch/] 自动更新
[select options="中文,English,日本語" placeholder="选择语言"/]
[button type="primary"]保存设置[/button]"#,
        5,
    ),
    case(
        "task-progress",
        Category::Complex,
        "Tracking task progress",
        r#"任务进度追踪
[tag type="info"]进行中[/tag]
[progress percentage="30"/] 数据收集
[progress percentage="60"/] 数据处理
[progress percentage="100" status="success"/] 数据验证
[alert type="info" title="提示"]预计还需要2小时完成[/alert]"#,
        5,
    ),
    case(
        "mixed-content",
        Category::Complex,
        "Widgets inside running prose",
        r#"欢迎来到 [tag type="primary"]内容转换器[/tag] 系统！

点击 [button type="primary"]开始使用[/button] 立即体验。

如有问题请 [link href="mailto:support@example.com"]联系我们[/link]"#,
        3,
    ),
    case(
        "event-demo",
        Category::Complex,
        "Widgets carrying event attributes",
        r#"事件交互演示：

[button type="primary" onclick="欢迎使用内容转换器！"]点击弹出消息[/button]
[button type="success" onclick="操作成功！"]成功操作[/button]
[button type="danger" onclick="危险操作警告！"]危险操作[/button]

[switch label="通知开关"/] 切换开关查看状态

[select options="北京,上海,广州,深圳" placeholder="选择城市"/] 选择后显示结果

[input placeholder="输入内容会记录到日志"/]

[link href="https://github.com"]点击链接会弹出确认[/link]

[progress percentage="75"/] 点击查看进度详情

[badge value="99"]消息[/badge] 点击查看通知

[dialog title="交互测试"]这是一个可交互的对话框，点击按钮会有不同响应。[/dialog]"#,
        10,
    ),
    // Edge
    case("empty", Category::Edge, "Empty input", "", 0),
    case(
        "plain-text",
        Category::Edge,
        "Text without any tags",
        "这是一段没有任何标签的纯文本内容，用于测试系统对纯文本的处理能力。",
        0,
    ),
    case(
        "special-characters",
        Category::Edge,
        "Markup-like characters inside content",
        r#"[button type="primary"]点击 < > & " ' 特殊字符[/button]"#,
        1,
    ),
    case(
        "long-content",
        Category::Edge,
        "A long inner text",
        concat!(
            r#"[alert title="长文本测试"]"#,
            "这是一段很长的文本内容。这是一段很长的文本内容。",
            "这是一段很长的文本内容。这是一段很长的文本内容。",
            "这是一段很长的文本内容。这是一段很长的文本内容。",
            "这是一段很长的文本内容。这是一段很长的文本内容。",
            "这是一段很长的文本内容。这是一段很长的文本内容。",
            "[/alert]",
        ),
        1,
    ),
    case(
        "adjacent-tags",
        Category::Edge,
        "Same-type tags with no space between them",
        "[button]1[/button][button]2[/button][button]3[/button][button]4[/button][button]5[/button]",
        5,
    ),
];

/// Every case, in catalog order.
pub fn all_cases() -> &'static [Case] {
    CASES
}

/// Cases in one category.
pub fn cases_in(category: Category) -> impl Iterator<Item = &'static Case> {
    CASES.iter().filter(move |c| c.category == category)
}

/// Look a case up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Case> {
    CASES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
