//! Picking the string to display for a section/key pair.

use super::language::Language;
use super::table::Translations;
use super::tree::{LanguageTree, TranslationNode};

/// Text for `section`/`key` in `language`.
///
/// Looks in the requested language, then in English, and finally returns the
/// `section.key` placeholder so a missing translation shows up on the page
/// instead of rendering blank. `key` names a direct child of the section.
pub fn resolve(tree: &Translations, section: &str, key: &str, language: Language) -> String {
    lookup(tree.get(language), section, key)
        .or_else(|| lookup(tree.get(Language::En), section, key))
        .map_or_else(|| format!("{section}.{key}"), str::to_string)
}

fn lookup<'a>(tree: &'a LanguageTree, section: &str, key: &str) -> Option<&'a str> {
    tree.section(section)
        .and_then(TranslationNode::as_branch)
        .and_then(|children| children.get(key))
        .and_then(TranslationNode::as_leaf)
}
