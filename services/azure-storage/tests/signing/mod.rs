mod canonicalize;
mod shared_key_lite;
