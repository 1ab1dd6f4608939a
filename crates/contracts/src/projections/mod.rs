pub mod p100_falcon_export;
