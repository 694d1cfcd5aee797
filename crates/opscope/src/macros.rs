//! Caller-name macros
//!
//! These macros name a scope after the function it is created in, so call
//! sites do not have to repeat their own name.

/// Name of the enclosing function
///
/// Returns the last path segment, skipping any closures the macro is
/// expanded inside.
///
/// # Example
///
/// ```
/// fn rebuild_index() -> &'static str {
///     opscope::function_name!()
/// }
///
/// assert_eq!(rebuild_index(), "rebuild_index");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __opscope_here() {}
        fn __opscope_type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __opscope_type_name_of(__opscope_here);
        let path = path.strip_suffix("::__opscope_here").unwrap_or(path);
        let path = path.trim_end_matches("::{{closure}}");
        path.rsplit("::").next().unwrap_or(path)
    }};
}

/// Start an operation scope named after the enclosing function
///
/// `$provider` is a reference to any `LogProvider`.
///
/// # Example
///
/// ```
/// use opscope::{operation_scope, TracingProvider};
///
/// fn compact(provider: &TracingProvider) {
///     let scope = operation_scope!(provider);
///     assert_eq!(scope.name(), "compact");
/// }
///
/// fn compact_with(provider: &TracingProvider) {
///     let mut scope = operation_scope!(provider, payload = &["segment-1", "segment-2"]);
///     scope.end();
/// }
/// # compact(&TracingProvider::new());
/// # compact_with(&TracingProvider::new());
/// ```
#[macro_export]
macro_rules! operation_scope {
    ($provider:expr) => {
        $crate::OperationLoggerExt::start_operation($provider, $crate::function_name!())
    };
    ($provider:expr, payload = $payload:expr) => {
        $crate::OperationLoggerExt::start_operation_with(
            $provider,
            $crate::function_name!(),
            $payload,
        )
    };
}
