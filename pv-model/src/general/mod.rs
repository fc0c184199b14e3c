pub mod regulation;
