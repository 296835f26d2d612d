pub mod ipinfo;

/// Source of geolocation records.
///
/// `ip` is `None` when the caller wants its own public address looked up.
#[allow(async_fn_in_trait)]
pub trait Lookup {
  async fn lookup(
    &self,
    ip: Option<&str>,
  ) -> Result<ipinfo::Record, ipinfo::Error>;
}
