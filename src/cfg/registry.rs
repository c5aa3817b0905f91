// Trait 注册表和工厂函数

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use super::type_options::TypeOptions;

// 构造函数返回 Box<dyn Any>，其中实际装的是 Box<dyn Trait>
type TraitConstructor =
    Box<dyn Fn(JsonValue) -> Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

// 外层 key 是 Trait 的 TypeId，内层 key 是类型名称
static TRAIT_REGISTRY: Lazy<RwLock<HashMap<TypeId, HashMap<String, TraitConstructor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 为实现特定 Trait 的类型注册构造函数
///
/// 同一个 Trait 可以注册多个实现，运行时根据 `TypeOptions.type_name` 选择
///
/// # 类型参数
/// - `T`: 具体实现类型
/// - `Trait`: 目标 trait（使用 `dyn Trait` 形式）
/// - `Config`: 配置类型
///
/// # 示例
/// ```ignore
/// register_trait::<JsonFormatter, dyn LogFormatter, JsonFormatterConfig>("JsonFormatter")?;
///
/// let formatter: Box<dyn LogFormatter> = create_trait_from_type_options(&type_options)?;
/// ```
pub fn register_trait<T, Trait, Config>(type_name: &str) -> Result<()>
where
    T: Send + Sync + 'static,
    Trait: ?Sized + Send + Sync + 'static,
    Config: DeserializeOwned + Clone + Send + Sync + 'static,
    T: From<Config>,
    Box<T>: Into<Box<Trait>>,
{
    let type_name = type_name.to_string();
    let trait_id = TypeId::of::<Trait>();

    let constructor: TraitConstructor = Box::new(move |value| {
        let config: Config = serde_json::from_value(value)?;
        let trait_object: Box<Trait> = Box::new(T::from(config)).into();
        Ok(Box::new(trait_object) as Box<dyn Any + Send + Sync>)
    });

    let mut registry = TRAIT_REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry
        .entry(trait_id)
        .or_insert_with(HashMap::new)
        .insert(type_name, constructor);

    Ok(())
}

/// 根据 TypeOptions 创建 trait object
///
/// # 示例
/// ```ignore
/// let opts = TypeOptions::from_json(r#"{"type": "ConsoleAppender", "options": {"target": "stderr"}}"#)?;
/// let appender: Box<dyn LogAppender> = create_trait_from_type_options(&opts)?;
/// ```
pub fn create_trait_from_type_options<Trait>(type_options: &TypeOptions) -> Result<Box<Trait>>
where
    Trait: ?Sized + Send + Sync + 'static,
{
    let trait_id = TypeId::of::<Trait>();
    let registry = TRAIT_REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let trait_registry = registry
        .get(&trait_id)
        .ok_or_else(|| anyhow!("No implementations registered for trait"))?;

    let constructor = trait_registry.get(&type_options.type_name).ok_or_else(|| {
        anyhow!(
            "Type '{}' not registered for this trait",
            type_options.type_name
        )
    })?;

    let any_box = constructor(type_options.options.clone())?;

    // Box<dyn Any> -> Box<Box<dyn Trait>> -> Box<dyn Trait>
    any_box
        .downcast::<Box<Trait>>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow!("Failed to downcast to target trait type"))
}
