//! Text of the debug overlay.

use crate::components::Player;

pub const HELP_LINE: &str = "ARROWS TO MOVE, UP TO JUMP, HOLD SPACE TO GRAB WHEN NEXT TO CRATE";

/// Overlay labels for one player, top to bottom.
pub fn overlay_lines(player: &Player) -> [String; 4] {
    [
        format!("Blocked: {}", player.blocked),
        format!("Grabbed: {}", player.grabbing),
        format!("Grounded: {}", player.grounded),
        HELP_LINE.to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BlockDir;

    #[test]
    fn labels_show_player_state() {
        let player = Player {
            blocked: BlockDir::Left,
            grabbing: true,
            ..Default::default()
        };
        let lines = overlay_lines(&player);
        assert_eq!(lines[0], "Blocked: LEFT");
        assert_eq!(lines[1], "Grabbed: true");
        assert_eq!(lines[2], "Grounded: false");
        assert_eq!(lines[3], HELP_LINE);
    }
}
