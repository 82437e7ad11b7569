const NEOVIM_0_5_HEADING: &str = "(requires neovim 0.5)";
const TREESITTER_COLORSCHEMES_HEADING: &str = "treesitter supported colorschemes";

/// Maps a raw heading to a canonical tag id.
///
/// Every whitespace character becomes a hyphen of its own,
/// runs of whitespace are not collapsed.
pub fn normalize(raw: &str) -> String {
    match raw {
        NEOVIM_0_5_HEADING => "neovim-0.5".to_string(),
        TREESITTER_COLORSCHEMES_HEADING => "treesitter-colorschemes".to_string(),
        _ => raw
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .collect(),
    }
}
