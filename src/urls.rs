//! Route patterns and the URL builders derived from them.
//!
//! The router mounts the patterns; handlers and templates build links with the helpers,
//! so a path is spelled out only here.

pub const PRODUK_LIST: &str = "/";
pub const PRODUK_CREATE: &str = "/add";
pub const PRODUK_UPDATE: &str = "/{id}/edit";
pub const PRODUK_DELETE: &str = "/{id}/delete";

pub fn produk_update(id: i64) -> String {
    PRODUK_UPDATE.replace("{id}", &id.to_string())
}

pub fn produk_delete(id: i64) -> String {
    PRODUK_DELETE.replace("{id}", &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_the_route_patterns() {
        assert_eq!(produk_update(7), "/7/edit");
        assert_eq!(produk_delete(42), "/42/delete");
        assert_eq!(PRODUK_LIST, "/");
        assert_eq!(PRODUK_CREATE, "/add");
    }
}
