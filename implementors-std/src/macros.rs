//! Literal table construction.

/// Build an [`ImplementorTable`](implementors_core::ImplementorTable) from a
/// literal.
///
/// Descriptors keep the order they are written in. A duplicate or empty
/// library name is a bug in the literal and panics.
///
/// # Example
///
/// ```rust
/// use implementors_std::implementor_table;
///
/// let table = implementor_table! {
///     "libA" => [
///         { text: "impl Foo", synthetic: true, types: [] },
///         { text: "impl Bar", synthetic: false, types: ["libA::Bar"] },
///     ],
///     "libB" => [],
/// };
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("libA").unwrap()[1].text, "impl Bar");
/// ```
#[macro_export]
macro_rules! implementor_table {
    (@descriptor { text: $text:expr, synthetic: $synthetic:expr, types: [$($ty:expr),* $(,)?] $(,)? }) => {
        $crate::__private::ImplementorDescriptor {
            text: ::std::string::String::from($text),
            synthetic: $synthetic,
            types: ::std::vec![$(::std::string::String::from($ty)),*],
        }
    };
    () => {
        $crate::__private::ImplementorTable::empty()
    };
    ($($library:expr => [$($descriptor:tt),* $(,)?]),+ $(,)?) => {{
        let mut builder = $crate::__private::TableBuilder::new();
        $(
            let descriptors: ::std::vec::Vec<$crate::__private::ImplementorDescriptor> =
                ::std::vec![$($crate::implementor_table!(@descriptor $descriptor)),*];
            if let ::std::result::Result::Err(err) = builder.insert($library, descriptors) {
                ::std::panic!("invalid implementor table literal: {}", err);
            }
        )+
        builder.build()
    }};
}
