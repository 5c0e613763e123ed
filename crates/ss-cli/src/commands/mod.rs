pub mod play;

use std::path::Path;

use ss_content::Dungeon;

/// Load the dungeon from `path`, or the built-in one when no path is given.
pub fn load_dungeon(path: Option<&Path>) -> Result<Dungeon, String> {
    let Some(path) = path else {
        return Dungeon::builtin().map_err(|e| format!("built-in dungeon is broken: {e}"));
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let dungeon = Dungeon::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "dungeon loaded from file");
    Ok(dungeon)
}
