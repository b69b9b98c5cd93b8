//! Declarative layer declaration for hand-written accessors.

// =============================================================================
// via_layers! - Claim forwarding layers for a host
// =============================================================================

/// Claim forwarding layers for a host that implements [`ReadVia`] (and
/// [`WriteVia`] for the writable layers) by hand.
///
/// Layer names are the `snake_case` forms of the layer traits without the
/// `Via` suffix. Every layer has to be listed, supertrait layers included.
/// Generics and `where` bounds go in brackets.
///
/// # Example
///
/// ```ignore
/// struct Queue<T> {
///     items: VecDeque<T>,
/// }
///
/// impl<T> ReadVia for Queue<T> { /* ... */ }
/// impl<T> WriteVia for Queue<T> { /* ... */ }
///
/// via_layers!(impl [T] Queue<T> => sequence, collection, mutable_collection);
///
/// via_layers!(impl [T] Queue<T> where [T: Clone] =>
///     bidirectional_collection, random_access_collection);
/// ```
///
/// [`ReadVia`]: crate::ReadVia
/// [`WriteVia`]: crate::WriteVia
#[macro_export]
macro_rules! via_layers {
    (@one [$($generics:tt)*] [$($bounds:tt)*] $host:ty, $layer:ident) => {
        $crate::paste::paste! {
            impl<$($generics)*> $crate::[<$layer:camel Via>] for $host where $($bounds)* {}
        }
    };
    (impl $generics:tt $host:ty where $bounds:tt => $($layer:ident),+ $(,)?) => {
        $( $crate::via_layers!(@one $generics $bounds $host, $layer); )+
    };
    (impl $generics:tt $host:ty => $($layer:ident),+ $(,)?) => {
        $( $crate::via_layers!(@one $generics [] $host, $layer); )+
    };
    ($host:ty => $($layer:ident),+ $(,)?) => {
        $( $crate::via_layers!(@one [] [] $host, $layer); )+
    };
}
