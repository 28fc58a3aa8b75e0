// Key classification shared by the keyboard handlers. Kept free of web-sys
// so host tests can include it.

/// Keys that activate a focused control the way a click does.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[inline]
pub fn is_escape_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
