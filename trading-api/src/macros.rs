/// Exposes a strategy type to the host as a boxed [`Strategist`](crate::Strategist).
///
/// The type must implement `Default`; the generated `entry_point` is what the
/// host calls to construct the plugin.
#[macro_export]
macro_rules! export_strategy {
    ($strategy_type:ty) => {
        pub fn entry_point() -> Box<dyn $crate::Strategist> {
            Box::new(<$strategy_type>::default())
        }
    };
}
