//! Five-row bitmap font for text banners.

/// Rows per banner glyph.
pub const BANNER_ROWS: usize = 5;

/// Errors produced while rendering a banner.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BannerError {
    #[error("Character {0:?} is not in the banner font")]
    UnsupportedChar(char),
    #[error("Fill character must be printable, got {0:?}")]
    InvalidFill(char),
}

/// Bitmap rows for a character. `#` marks a filled pixel.
fn glyph(c: char) -> Option<[&'static str; BANNER_ROWS]> {
    let rows = match c.to_ascii_uppercase() {
        'A' => [" ### ", "#   #", "#####", "#   #", "#   #"],
        'B' => ["#### ", "#   #", "#### ", "#   #", "#### "],
        'C' => [" ####", "#    ", "#    ", "#    ", " ####"],
        'D' => ["#### ", "#   #", "#   #", "#   #", "#### "],
        'E' => ["#####", "#    ", "#### ", "#    ", "#####"],
        'F' => ["#####", "#    ", "#### ", "#    ", "#    "],
        'G' => [" ####", "#    ", "#  ##", "#   #", " ### "],
        'H' => ["#   #", "#   #", "#####", "#   #", "#   #"],
        'I' => ["###", " # ", " # ", " # ", "###"],
        'J' => ["  ###", "   # ", "   # ", "#  # ", " ##  "],
        'K' => ["#   #", "#  # ", "###  ", "#  # ", "#   #"],
        'L' => ["#    ", "#    ", "#    ", "#    ", "#####"],
        'M' => ["#   #", "## ##", "# # #", "#   #", "#   #"],
        'N' => ["#   #", "##  #", "# # #", "#  ##", "#   #"],
        'O' => [" ### ", "#   #", "#   #", "#   #", " ### "],
        'P' => ["#### ", "#   #", "#### ", "#    ", "#    "],
        'Q' => [" ### ", "#   #", "# # #", "#  # ", " ## #"],
        'R' => ["#### ", "#   #", "#### ", "#  # ", "#   #"],
        'S' => [" ####", "#    ", " ### ", "    #", "#### "],
        'T' => ["#####", "  #  ", "  #  ", "  #  ", "  #  "],
        'U' => ["#   #", "#   #", "#   #", "#   #", " ### "],
        'V' => ["#   #", "#   #", "#   #", " # # ", "  #  "],
        'W' => ["#   #", "#   #", "# # #", "## ##", "#   #"],
        'X' => ["#   #", " # # ", "  #  ", " # # ", "#   #"],
        'Y' => ["#   #", " # # ", "  #  ", "  #  ", "  #  "],
        'Z' => ["#####", "   # ", "  #  ", " #   ", "#####"],
        '0' => [" ### ", "#  ##", "# # #", "##  #", " ### "],
        '1' => [" # ", "## ", " # ", " # ", "###"],
        '2' => [" ### ", "#   #", "  ## ", " #   ", "#####"],
        '3' => ["#### ", "    #", " ### ", "    #", "#### "],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#### ", "    #", "#### "],
        '6' => [" ### ", "#    ", "#### ", "#   #", " ### "],
        '7' => ["#####", "    #", "   # ", "  #  ", "  #  "],
        '8' => [" ### ", "#   #", " ### ", "#   #", " ### "],
        '9' => [" ### ", "#   #", " ####", "    #", " ### "],
        ' ' => ["   ", "   ", "   ", "   ", "   "],
        '!' => ["#", "#", "#", " ", "#"],
        '?' => [" ### ", "#   #", "  ## ", "     ", "  #  "],
        '.' => [" ", " ", " ", " ", "#"],
        ',' => ["  ", "  ", "  ", " #", "# "],
        '-' => ["    ", "    ", "####", "    ", "    "],
        ':' => [" ", "#", " ", "#", " "],
        _ => return None,
    };
    Some(rows)
}

/// Render `text` as a banner, drawing filled pixels with `fill`.
///
/// Lowercase letters are drawn as uppercase. Glyphs are separated by one
/// blank column and trailing blanks are trimmed. Each line of input
/// becomes its own 5-row block, with an empty line between blocks.
///
/// # Example
/// ```ignore
/// let banner = render_banner("HI", '#')?;
/// assert_eq!(banner.lines().next(), Some("#   # ###"));
/// ```
pub fn render_banner(text: &str, fill: char) -> Result<String, BannerError> {
    if fill.is_control() || fill.is_whitespace() {
        return Err(BannerError::InvalidFill(fill));
    }

    let mut blocks = Vec::new();
    for line in text.lines() {
        let glyphs = line
            .chars()
            .map(|c| glyph(c).ok_or(BannerError::UnsupportedChar(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut block = String::new();
        for row in 0..BANNER_ROWS {
            let joined = glyphs.iter().map(|g| g[row]).collect::<Vec<_>>().join(" ");
            let drawn: String = joined.chars().map(|p| if p == '#' { fill } else { ' ' }).collect();
            block.push_str(drawn.trim_end());
            block.push('\n');
        }
        blocks.push(block);
    }

    Ok(blocks.join("\n"))
}
