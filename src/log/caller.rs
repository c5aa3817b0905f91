//! 调用方解析
//!
//! 每次写日志时沿调用栈由内向外查找，跳过本库自身的栈帧，
//! 把第一个库外栈帧的符号名拆成 (函数名, 模块名)。
//!
//! 符号名拆分规则：
//!
//! - `app::service::handle` → 函数 `handle`，模块 `app::service`
//! - `app::service::Handler::run` → 函数 `Handler::run`，模块 `app::service`
//! - `<app::service::Handler as app::Job>::run` → 函数 `Handler::run`，模块 `app::service`
//! - 泛型参数、`{{closure}}` 等编译器生成的后缀会被去掉
//!
//! 解析失败（没有符号表、被 strip、内联后丢失栈帧）时返回空的 [`Caller`]，不会让日志调用失败。
//! 库外第一个栈帧属于 `core` / `std` / `alloc` / `backtrace` 时，说明调用方已被内联进
//! 标准库的胶水代码，同样返回空身份。
//!
//! release 构建需要保留行表才能还原内联栈帧：
//!
//! ```toml
//! [profile.release]
//! debug = "line-tables-only"
//! ```

use std::sync::Arc;

/// 调用方身份
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    /// 函数名，方法为 `Type::method`
    pub function: String,
    /// 模块路径，例如 `app::service`
    pub module: String,
}

impl Caller {
    pub fn new(function: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            module: module.into(),
        }
    }

    /// 函数名或模块名缺失
    pub fn is_empty(&self) -> bool {
        self.function.is_empty() || self.module.is_empty()
    }

    /// `<模块路径最后一段>.<函数名>`，供文本格式化器展示
    ///
    /// 方法保留 `Type::method` 形式，例如 `service.Handler::run`，
    /// 与过滤列表里的函数名写法一致
    pub fn qualified_name(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let last = self.module.rsplit("::").next().unwrap_or(&self.module);
        format!("{}.{}", last, self.function)
    }
}

/// 调用栈访问能力
///
/// 不同平台可以提供不同实现；拿不到调用栈的平台使用 [`NoopIntrospector`]
pub trait StackIntrospector: Send + Sync {
    /// 由内向外依次访问当前线程的栈帧符号名（已 demangle，不含 hash）
    ///
    /// 无法解析的栈帧传入空字符串；`visit` 返回 false 时停止遍历
    fn walk(&self, visit: &mut dyn FnMut(&str) -> bool);
}

/// 基于 `backtrace` crate 的调用栈访问
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktraceIntrospector;

impl StackIntrospector for BacktraceIntrospector {
    fn walk(&self, visit: &mut dyn FnMut(&str) -> bool) {
        backtrace::trace(|frame| {
            let mut keep_going = true;
            let mut resolved = false;
            // 内联函数会对同一个栈帧回调多次，由内向外
            backtrace::resolve_frame(frame, |symbol| {
                resolved = true;
                if keep_going {
                    let name = symbol
                        .name()
                        .map(|name| format!("{:#}", name))
                        .unwrap_or_default();
                    keep_going = visit(&name);
                }
            });
            if !resolved {
                keep_going = visit("");
            }
            keep_going
        });
    }
}

/// 不访问调用栈，调用方身份始终为空
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIntrospector;

impl StackIntrospector for NoopIntrospector {
    fn walk(&self, _visit: &mut dyn FnMut(&str) -> bool) {}
}

/// 调用方解析器
#[derive(Clone)]
pub struct CallerResolver {
    introspector: Arc<dyn StackIntrospector>,
    library: &'static str,
}

impl CallerResolver {
    pub fn new(introspector: Arc<dyn StackIntrospector>) -> Self {
        Self {
            introspector,
            library: library_root(),
        }
    }

    /// 始终返回空身份的解析器
    pub fn noop() -> Self {
        Self::new(Arc::new(NoopIntrospector))
    }

    /// 本库的根模块名，栈帧模块等于它或位于它之下即视为库内栈帧
    pub fn library(&self) -> &str {
        self.library
    }

    /// 解析当前调用方
    ///
    /// 第一个库内栈帧之前的栈帧属于调用栈访问本身，直接跳过；
    /// 之后遇到的第一个库外栈帧（或无法解析的栈帧）即为调用方，
    /// 该栈帧属于标准库运行时时返回空身份
    pub fn resolve(&self) -> Caller {
        let mut inside_library = false;
        let mut caller = Caller::default();

        self.introspector.walk(&mut |symbol| {
            let frame = parse_symbol(symbol);
            if !inside_library {
                inside_library = self.is_library(&frame);
                return true;
            }
            if self.is_library(&frame) {
                return true;
            }
            if !is_runtime(&frame) {
                caller = frame;
            }
            false
        });

        caller
    }

    fn is_library(&self, frame: &Caller) -> bool {
        match frame.module.strip_prefix(self.library) {
            Some(rest) => rest.is_empty() || rest.starts_with("::"),
            None => false,
        }
    }
}

impl Default for CallerResolver {
    fn default() -> Self {
        Self::new(Arc::new(BacktraceIntrospector))
    }
}

impl std::fmt::Debug for CallerResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallerResolver")
            .field("library", &self.library)
            .finish_non_exhaustive()
    }
}

// 标准库和回溯实现的栈帧
const RUNTIME_CRATES: [&str; 4] = ["core", "std", "alloc", "backtrace"];

fn is_runtime(frame: &Caller) -> bool {
    let root = frame.module.split("::").next().unwrap_or_default();
    RUNTIME_CRATES.contains(&root)
}

fn library_root() -> &'static str {
    module_path!().split("::").next().unwrap_or_default()
}

/// 把 demangle 后的符号名拆成 (函数名, 模块名)
///
/// 无法拆出模块名时返回空身份
pub fn parse_symbol(symbol: &str) -> Caller {
    let path = strip_generic_args(symbol.trim());
    let parsed = match path.strip_prefix('<') {
        Some(qualified) => split_qualified(qualified),
        None => split_plain(&path),
    };
    match parsed {
        Some((function, module)) => Caller::new(function, module),
        None => Caller::default(),
    }
}

// `<Type as Trait>::method`，传入时已去掉开头的 `<`
fn split_qualified(qualified: &str) -> Option<(String, String)> {
    let end = closing_angle(qualified)?;
    let inner = &qualified[..end];
    let rest = qualified[end + 1..].strip_prefix("::")?;

    let self_ty = inner.split(" as ").next()?.trim();
    let self_ty = self_ty
        .trim_start_matches(['&', '*'])
        .trim_start_matches("mut ")
        .trim_start_matches("const ")
        .trim_start_matches("dyn ");
    if self_ty.starts_with('<') {
        return None;
    }

    let mut type_path = segments(self_ty);
    let receiver = type_path.pop()?;
    let method = segments(rest);
    if type_path.is_empty() || method.is_empty() {
        return None;
    }

    Some((
        format!("{}::{}", receiver, method.join("::")),
        type_path.join("::"),
    ))
}

fn split_plain(path: &str) -> Option<(String, String)> {
    let parts = segments(path);
    let n = parts.len();
    if n < 2 {
        return None;
    }

    if n >= 3 && is_type_name(parts[n - 2]) {
        Some((
            format!("{}::{}", parts[n - 2], parts[n - 1]),
            parts[..n - 2].join("::"),
        ))
    } else {
        Some((parts[n - 1].to_string(), parts[..n - 1].join("::")))
    }
}

// 按 `::` 拆分，去掉 `{{closure}}` / `{shim:vtable#0}` / hash 等编译器生成的部分
fn segments(path: &str) -> Vec<&str> {
    let parts: Vec<&str> = path
        .split("::")
        .map(|segment| {
            let segment = segment.trim();
            match segment.find('{') {
                Some(index) => &segment[..index],
                None => segment,
            }
        })
        .filter(|segment| !segment.is_empty())
        .collect();

    match parts.split_last() {
        Some((last, rest)) if is_hash_segment(last) => rest.to_vec(),
        _ => parts,
    }
}

fn is_type_name(segment: &str) -> bool {
    segment.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

fn is_hash_segment(segment: &str) -> bool {
    segment.len() == 17
        && segment.starts_with('h')
        && segment[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// 去掉 `::<T>` 和 `Vec<T>` 形式的泛型参数，保留限定路径开头的 `<`
fn strip_generic_args(symbol: &str) -> String {
    let mut out = String::with_capacity(symbol.len());
    let mut depth = 0usize;
    let mut prev = '\0';

    for c in symbol.chars() {
        if depth > 0 {
            match c {
                '<' => depth += 1,
                '>' if prev != '-' => depth -= 1,
                _ => {}
            }
            prev = c;
            continue;
        }

        if c == '<' {
            let turbofish = out.ends_with("::");
            let generic = turbofish || out.chars().last().is_some_and(is_ident_char);
            if generic {
                if turbofish {
                    out.truncate(out.len() - 2);
                }
                depth = 1;
                prev = c;
                continue;
            }
        }

        out.push(c);
        prev = c;
    }

    out
}

// 找到与开头 `<`（已去掉）配对的 `>` 的位置
fn closing_angle(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut prev = '\0';
    for (index, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev != '-' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
        prev = c;
    }
    None
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
