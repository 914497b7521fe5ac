pub mod produk;
