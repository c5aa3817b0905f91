use crate::cfg::{create_trait_from_type_options, TypeOptions};
use crate::log::appender::{ConsoleAppender, LogAppender};
use crate::log::caller::{Caller, CallerResolver};
use crate::log::formatter::{LogFormatter, TextFormatter};
use crate::log::level::LogLevel;
use crate::log::record::LogRecord;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError};

/// 白名单 / 黑名单
///
/// - `functions`：函数名完全相等才算命中
/// - `modules`：模块路径以条目开头或结尾即算命中
///
/// 空字符串条目永远不会命中
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterList {
    pub functions: Vec<String>,
    pub modules: Vec<String>,
}

impl FilterList {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.modules.is_empty()
    }

    /// 调用方是否命中任一条目
    pub fn matches(&self, caller: &Caller) -> bool {
        let function_hit = self
            .functions
            .iter()
            .any(|name| !name.is_empty() && *name == caller.function);
        if function_hit {
            return true;
        }

        self.modules.iter().any(|module| {
            !module.is_empty()
                && (caller.module.starts_with(module.as_str())
                    || caller.module.ends_with(module.as_str()))
        })
    }

    fn clear(&mut self) {
        self.functions.clear();
        self.modules.clear();
    }
}

/// 单个输出目标配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Formatter 配置
    #[default(TypeOptions::new("TextFormatter"))]
    pub formatter: TypeOptions,

    /// Appender 配置
    #[default(TypeOptions::new("ConsoleAppender"))]
    pub appender: TypeOptions,
}

/// Logger 配置
///
/// ```text
/// {
///     debug_mode: true,
///     outputs: [
///         { formatter: { type: "TextFormatter" }, appender: { type: "ConsoleAppender" } },
///         { formatter: { type: "JsonFormatter" }, appender: { type: "FileAppender", options: { file_path: "app.log" } } },
///     ],
///     denylist: { modules: ["my_app::noisy"] },
/// }
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 是否输出 DEBUG 日志
    pub debug_mode: bool,

    /// 输出目标，默认只有一个终端文本输出
    #[default(vec![OutputConfig::default()])]
    pub outputs: Vec<OutputConfig>,

    /// DEBUG 日志白名单
    pub allowlist: FilterList,

    /// DEBUG 日志黑名单
    pub denylist: FilterList,
}

impl LoggerConfig {
    /// 从 JSON 字符串创建配置（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// 写入失败回调，参数为当前日志记录和 appender 返回的错误
pub type WriteErrorHandler = Arc<dyn Fn(&LogRecord, &anyhow::Error) + Send + Sync>;

/// 日志消息，多段内容之间用一个空格连接
pub trait IntoMessage {
    fn into_message(self) -> String;
}

impl IntoMessage for &str {
    fn into_message(self) -> String {
        self.to_string()
    }
}

impl IntoMessage for String {
    fn into_message(self) -> String {
        self
    }
}

impl IntoMessage for &String {
    fn into_message(self) -> String {
        self.clone()
    }
}

impl<S: AsRef<str>> IntoMessage for &[S] {
    fn into_message(self) -> String {
        join_parts(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoMessage for [S; N] {
    fn into_message(self) -> String {
        join_parts(&self)
    }
}

impl<S: AsRef<str>> IntoMessage for Vec<S> {
    fn into_message(self) -> String {
        join_parts(&self)
    }
}

fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
    let mut message = String::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            message.push(' ');
        }
        message.push_str(part.as_ref());
    }
    message
}

/// 注册所有日志组件（只执行一次）
static REGISTER_ONCE: Once = Once::new();

struct Destination {
    appender: Arc<dyn LogAppender>,
    formatter: Arc<dyn LogFormatter>,
}

#[derive(Default)]
struct LoggerState {
    // 按注册顺序写入
    outputs: Vec<Destination>,
    debug_mode: bool,
    allowlist: FilterList,
    denylist: FilterList,
    on_write_error: Option<WriteErrorHandler>,
}

impl LoggerState {
    fn set_output(&mut self, appender: Arc<dyn LogAppender>, formatter: Arc<dyn LogFormatter>) {
        match self
            .outputs
            .iter_mut()
            .find(|output| Arc::ptr_eq(&output.appender, &appender))
        {
            Some(output) => output.formatter = formatter,
            None => self.outputs.push(Destination {
                appender,
                formatter,
            }),
        }
    }

    // 白名单为空或命中白名单，且没有命中黑名单
    fn debug_allowed(&self, caller: &Caller) -> bool {
        let allowed = self.allowlist.is_empty() || self.allowlist.matches(caller);
        allowed && !self.denylist.matches(caller)
    }

    fn dispatch(&self, record: &LogRecord) {
        for output in &self.outputs {
            let formatted = output.formatter.format(record);
            if let Err(err) = output.appender.append(&formatted) {
                if let Some(handler) = &self.on_write_error {
                    handler(record, &err);
                }
            }
        }
    }
}

/// 核心日志器
///
/// 所有状态由一把互斥锁保护，包括向各个输出目标写入的过程，
/// 因此同一个 Logger 上的日志不会交错。
///
/// 每条日志都会沿调用栈解析调用方（函数名、模块路径），
/// DEBUG 日志只有在调试模式打开、且调用方通过白名单/黑名单过滤时才会输出。
///
/// 注意：appender、formatter 或写入失败回调中再调用同一个 Logger 会死锁。
pub struct Logger {
    state: Mutex<LoggerState>,
    resolver: CallerResolver,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("outputs", &state.outputs.len())
            .field("debug_mode", &state.debug_mode)
            .field("allowlist", &state.allowlist)
            .field("denylist", &state.denylist)
            .field("resolver", &self.resolver)
            .finish()
    }
}

impl Logger {
    /// 创建没有任何输出目标的 Logger
    pub fn new() -> Self {
        Self::with_resolver(CallerResolver::default())
    }

    /// 使用指定的调用方解析器创建 Logger
    pub fn with_resolver(resolver: CallerResolver) -> Self {
        Self {
            state: Mutex::new(LoggerState::default()),
            resolver,
        }
    }

    /// 创建输出到标准输出、使用默认文本格式的 Logger
    pub fn with_console() -> Self {
        let logger = Self::new();
        logger.set_output(Arc::new(ConsoleAppender::stdout()));
        logger
    }

    /// 从配置创建 Logger
    ///
    /// formatter / appender 按类型名从注册表中创建，组件在第一次调用时自动注册
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        REGISTER_ONCE.call_once(|| {
            let _ = crate::log::register_log_components();
        });

        let mut outputs = Vec::with_capacity(config.outputs.len());
        for output in &config.outputs {
            let formatter: Box<dyn LogFormatter> =
                create_trait_from_type_options(&output.formatter)?;
            let appender: Box<dyn LogAppender> = create_trait_from_type_options(&output.appender)?;
            outputs.push((Arc::from(appender), Arc::from(formatter)));
        }

        let logger = Self::new();
        logger.set_formatted_outputs(outputs);
        {
            let mut state = logger.lock();
            state.debug_mode = config.debug_mode;
            state.allowlist = config.allowlist;
            state.denylist = config.denylist;
        }
        Ok(logger)
    }

    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========== 输出目标 ==========

    /// 添加输出目标，使用默认文本格式
    ///
    /// appender 已存在时把它的格式化器替换为默认文本格式
    pub fn set_output(&self, appender: Arc<dyn LogAppender>) {
        self.set_formatted_output(appender, Arc::new(TextFormatter::default()));
    }

    /// 批量添加输出目标，使用默认文本格式
    pub fn set_outputs(&self, appenders: Vec<Arc<dyn LogAppender>>) {
        let mut state = self.lock();
        for appender in appenders {
            state.set_output(appender, Arc::new(TextFormatter::default()));
        }
    }

    /// 添加带格式化器的输出目标，appender 已存在时替换它的格式化器
    pub fn set_formatted_output(
        &self,
        appender: Arc<dyn LogAppender>,
        formatter: Arc<dyn LogFormatter>,
    ) {
        self.lock().set_output(appender, formatter);
    }

    /// 批量添加带格式化器的输出目标
    pub fn set_formatted_outputs(&self, outputs: Vec<(Arc<dyn LogAppender>, Arc<dyn LogFormatter>)>) {
        let mut state = self.lock();
        for (appender, formatter) in outputs {
            state.set_output(appender, formatter);
        }
    }

    /// 移除所有输出目标
    pub fn clear_outputs(&self) {
        self.lock().outputs.clear();
    }

    /// 当前输出目标数量
    pub fn output_count(&self) -> usize {
        self.lock().outputs.len()
    }

    /// 刷新所有输出目标，返回遇到的第一个错误
    pub fn flush(&self) -> Result<()> {
        let state = self.lock();
        let mut result = Ok(());
        for output in &state.outputs {
            if let Err(err) = output.appender.flush() {
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }
        result
    }

    // ========== 调试模式与过滤 ==========

    pub fn set_debug_mode(&self, enabled: bool) {
        self.lock().debug_mode = enabled;
    }

    pub fn debug_mode(&self) -> bool {
        self.lock().debug_mode
    }

    /// 追加函数黑名单
    pub fn denylist_functions<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .denylist
            .functions
            .extend(names.into_iter().map(Into::into));
    }

    /// 追加模块黑名单
    pub fn denylist_modules<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .denylist
            .modules
            .extend(names.into_iter().map(Into::into));
    }

    pub fn clear_denylist(&self) {
        self.lock().denylist.clear();
    }

    /// 追加函数白名单
    pub fn allowlist_functions<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .allowlist
            .functions
            .extend(names.into_iter().map(Into::into));
    }

    /// 追加模块白名单
    pub fn allowlist_modules<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock()
            .allowlist
            .modules
            .extend(names.into_iter().map(Into::into));
    }

    pub fn clear_allowlist(&self) {
        self.lock().allowlist.clear();
    }

    pub fn allowlist(&self) -> FilterList {
        self.lock().allowlist.clone()
    }

    pub fn denylist(&self) -> FilterList {
        self.lock().denylist.clone()
    }

    // ========== 写入失败回调 ==========

    /// 设置写入失败回调，不设置时写入失败被忽略
    pub fn set_write_error_handler<F>(&self, handler: F)
    where
        F: Fn(&LogRecord, &anyhow::Error) + Send + Sync + 'static,
    {
        self.lock().on_write_error = Some(Arc::new(handler));
    }

    pub fn clear_write_error_handler(&self) {
        self.lock().on_write_error = None;
    }

    // ========== 日志 ==========

    /// 记录 ERROR 级别日志
    pub fn error(&self, message: impl IntoMessage) {
        self.log(LogLevel::Error, message.into_message());
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: impl IntoMessage) {
        self.log(LogLevel::Info, message.into_message());
    }

    /// 记录 DEBUG 级别日志
    pub fn debug(&self, message: impl IntoMessage) {
        self.log(LogLevel::Debug, message.into_message());
    }

    /// 记录格式化的 ERROR 级别日志，通常通过 `errorf!` 调用
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, fmt::format(args));
    }

    /// 记录格式化的 INFO 级别日志，通常通过 `infof!` 调用
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, fmt::format(args));
    }

    /// 记录格式化的 DEBUG 级别日志，通常通过 `debugf!` 调用
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, fmt::format(args));
    }

    /// 不做任何事，把 `debug` 改名为 `xdebug` 即可关掉单条 DEBUG 日志
    pub fn xdebug(&self, _message: impl IntoMessage) {}

    /// 不做任何事，对应 `debugf`
    pub fn xdebugf(&self, _args: fmt::Arguments<'_>) {}

    /// 记录日志，调用方从调用栈解析
    pub fn log(&self, level: LogLevel, message: String) {
        let state = self.lock();
        if level == LogLevel::Debug && !state.debug_mode {
            return;
        }

        let caller = self.resolver.resolve();
        if level == LogLevel::Debug && !state.debug_allowed(&caller) {
            return;
        }

        state.dispatch(&LogRecord::new(level, message).with_caller(caller));
    }

    /// 记录已经带有调用方的日志，供 `log` crate 桥接使用
    pub fn log_record(&self, record: &LogRecord) {
        let state = self.lock();
        if record.level == LogLevel::Debug
            && !(state.debug_mode && state.debug_allowed(&record.caller))
        {
            return;
        }

        state.dispatch(record);
    }
}
