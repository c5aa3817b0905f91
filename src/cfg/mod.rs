//! cfg 模块 - 配置管理
//!
//! 提供基于 `TypeOptions` 的组件配置：按类型名从注册表中创建 formatter / appender 等 trait object

mod macros;
pub mod registry;
pub mod type_options;

// 重新导出公共 API
pub use registry::{create_trait_from_type_options, register_trait};
pub use type_options::TypeOptions;
