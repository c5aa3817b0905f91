//! 配置相关的宏定义
//!
//! 简化 `From<Config>` 以及 `Box<T> -> Box<dyn Trait>` 的实现，供注册表使用

/// 为配置类型实现 `From<Config>`
///
/// 用法：`impl_from!(ConfigType => Type)`，调用 `Type::new(config)`
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 `Box<T>` 实现到 `Box<dyn Trait>` 的转换
///
/// 用法：`impl_box_from!(Type => dyn TraitName)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone)]
    struct SinkConfig {
        path: String,
    }

    struct PathSink {
        config: SinkConfig,
    }

    impl PathSink {
        fn new(config: SinkConfig) -> Self {
            Self { config }
        }
    }

    trait Sink {
        fn path(&self) -> &str;
    }

    impl Sink for PathSink {
        fn path(&self) -> &str {
            &self.config.path
        }
    }

    impl_from!(SinkConfig => PathSink);
    impl_box_from!(PathSink => dyn Sink);

    #[test]
    fn test_impl_from_new() {
        let sink = PathSink::from(SinkConfig {
            path: "/var/log/app.log".to_string(),
        });
        assert_eq!(sink.config.path, "/var/log/app.log");
    }

    #[test]
    fn test_impl_box_from() {
        let sink = PathSink::from(SinkConfig {
            path: "boxed.log".to_string(),
        });
        let boxed: Box<dyn Sink> = Box::new(sink).into();
        assert_eq!(boxed.path(), "boxed.log");
    }
}
