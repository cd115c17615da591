use proc_macro::TokenStream;

mod attr;
mod record;

/// Derive `mocknode::core::record::Record` plus wire-shaped serde impls.
///
/// ```ignore
/// #[derive(Record)]
/// #[record(rename_all = "PascalCase")]
/// pub struct MinerInfo {
///     #[field(default = "t01000")]
///     pub owner: String,
///     #[field(wire = "WindowPoStPartitionSectors", default_with = or_zero)]
///     pub window_post_partition_sectors: u64,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record, field))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
