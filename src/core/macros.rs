//! 核心宏定义

/// 为配置结构体实现 Default trait 的宏
///
/// 使用示例:
/// ```rust
/// use starfield::impl_default;
///
/// struct Spacing {
///     inset: f32,
///     rows: u32,
/// }
///
/// impl_default!(Spacing {
///     inset: 100.0,
///     rows: 2,
/// });
///
/// assert_eq!(Spacing::default().rows, 2);
/// ```
#[macro_export]
macro_rules! impl_default {
    ($struct_name:ident {
        $($field:ident: $value:expr),* $(,)?
    }) => {
        impl Default for $struct_name {
            fn default() -> Self {
                Self {
                    $($field: $value),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    struct Cooldown {
        millis: u64,
        label: String,
    }

    impl_default!(Cooldown {
        millis: 100,
        label: "spawn".to_string(),
    });

    #[test]
    fn test_impl_default() {
        let c = Cooldown::default();
        assert_eq!(c.millis, 100);
        assert_eq!(c.label, "spawn");
    }
}
