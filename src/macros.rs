//! Declarative macros shared across the crate
//!
//! These macros eliminate repetitive match code over closed enums.
//! `impl_enum_accessors!` uses `paste` internally for identifier
//! concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element, text);
/// }
/// ```
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Define the closed set of block types and the typed content sum type
///
/// Each entry maps a variant to its content struct and its wire tag:
///
/// ```ignore
/// define_block_types! {
///     Hero(HeroContent) => "hero",
///     Text(TextContent) => "text",
///     RichText(TextContent) => "rich_text",
/// }
/// ```
///
/// Generates:
/// - `BlockType` with `ALL`, `as_str()`, `parse()`
/// - `BlockContent` with one variant per type plus `Unrecognized`, and
///   `block_type()`, `type_name()`, `decode()`, `Serialize`
macro_rules! define_block_types {
    ($($(#[$meta:meta])* $variant:ident($content:ty) => $tag:literal),* $(,)?) => {
        /// Closed set of block type tags
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum BlockType {
            $($(#[$meta])* $variant,)*
        }

        impl BlockType {
            /// Every block type, in palette order
            pub const ALL: &'static [BlockType] = &[$(BlockType::$variant,)*];

            /// Wire tag stored in the `type` field
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(BlockType::$variant => $tag,)*
                }
            }

            /// Parse a wire tag; unknown tags are `None`
            pub fn parse(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(BlockType::$variant),)*
                    _ => None,
                }
            }
        }

        /// Typed content payload, one variant per block type
        #[derive(Debug, Clone, PartialEq)]
        pub enum BlockContent {
            $($variant($content),)*
            /// A type this crate does not know, or content that does not fit
            /// its type's schema. Kept verbatim so it saves back unchanged.
            Unrecognized {
                type_name: String,
                content: ::serde_json::Value,
            },
        }

        impl BlockContent {
            /// Block type, or `None` for unrecognized content
            pub fn block_type(&self) -> Option<BlockType> {
                match self {
                    $(Self::$variant(_) => Some(BlockType::$variant),)*
                    Self::Unrecognized { .. } => None,
                }
            }

            /// Wire tag, including the raw tag of unrecognized content
            pub fn type_name(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $tag,)*
                    Self::Unrecognized { type_name, .. } => type_name.as_str(),
                }
            }

            /// Decode raw content JSON into the typed payload of `block_type`
            pub fn decode(
                block_type: BlockType,
                value: ::serde_json::Value,
            ) -> Result<Self, ::serde_json::Error> {
                match block_type {
                    $(BlockType::$variant => {
                        ::serde_json::from_value::<$content>(value).map(Self::$variant)
                    })*
                }
            }
        }

        impl ::serde::Serialize for BlockContent {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(content) => ::serde::Serialize::serialize(content, serializer),)*
                    Self::Unrecognized { content, .. } => {
                        ::serde::Serialize::serialize(content, serializer)
                    }
                }
            }
        }
    };
}
