//! Chinese translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Bookfinder");

    // Search
    m.insert(Key::SearchPlaceholder, "输入关键词搜索");
    m.insert(Key::SearchButton, "搜索");
    m.insert(Key::Searching, "搜索中...");
    m.insert(Key::EmptyHint, "搜索一本书开始吧");

    // Book card
    m.insert(Key::PriceLabel, "价格:");
    m.insert(Key::RemoveButton, "移除");

    // Notices
    m.insert(Key::NoticeEmptyTerm, "请输入搜索词");
    m.insert(Key::NoticeNoBooks, "没有找到书籍!");

    // Header
    m.insert(Key::DarkMode, "深色模式");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
