//! 弹窗与按钮配置
//!
//! 弹窗的按钮列表直接作为字段挂在配置上，点击后交给引擎执行对应命令。

use crate::game::difficulty::Difficulty;

/// 弹窗按钮触发的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundCommand {
    /// 回到等待状态（"再来一次"）
    Reset,
    /// 成功后继续下一局
    StartNextRound,
    /// 离开游戏页面
    Exit,
}

/// 弹窗按钮样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertActionStyle {
    #[default]
    Default,
    Destructive,
}

/// 按钮样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Warning,
    /// 难度选择按钮，配色随难度变化
    Difficulty(Difficulty),
}

impl ButtonStyle {
    /// 主页的难度选择按钮
    pub fn difficulty_menu() -> [ButtonStyle; 3] {
        Difficulty::all().map(ButtonStyle::Difficulty)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            ButtonStyle::Difficulty(difficulty) => Some(*difficulty),
            _ => None,
        }
    }
}

impl From<AlertActionStyle> for ButtonStyle {
    fn from(style: AlertActionStyle) -> Self {
        match style {
            AlertActionStyle::Destructive => ButtonStyle::Primary,
            AlertActionStyle::Default => ButtonStyle::Secondary,
        }
    }
}

/// 弹窗按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertAction {
    pub title: String,
    pub style: AlertActionStyle,
    pub command: RoundCommand,
}

impl AlertAction {
    pub fn new(title: impl Into<String>, command: RoundCommand) -> Self {
        Self {
            title: title.into(),
            style: AlertActionStyle::Default,
            command,
        }
    }

    pub fn button_style(&self) -> ButtonStyle {
        self.style.into()
    }
}

/// 弹窗配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    pub title: String,
    pub message: String,
    pub actions: Vec<AlertAction>,
}

impl AlertConfig {
    /// 失败弹窗
    ///
    /// # 参数
    ///
    /// - `final_streak`: 被清零前的连胜数
    pub fn round_failed(final_streak: u32) -> Self {
        Self {
            title: "Game Over".to_string(),
            message: format!(
                "Wrong selection! Your streak has been reset.\n\nFinal streak: {} rounds",
                final_streak
            ),
            actions: vec![
                AlertAction::new("Try Again", RoundCommand::Reset),
                AlertAction::new("Back to Menu", RoundCommand::Exit),
            ],
        }
    }

    /// 第 `index` 个按钮对应的命令
    pub fn command_for(&self, index: usize) -> Option<RoundCommand> {
        self.actions.get(index).map(|action| action.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_failed_alert() {
        let alert = AlertConfig::round_failed(4);
        assert_eq!(alert.title, "Game Over");
        assert!(alert.message.ends_with("Final streak: 4 rounds"));
        assert_eq!(alert.actions.len(), 2);
        assert_eq!(alert.command_for(0), Some(RoundCommand::Reset));
        assert_eq!(alert.command_for(1), Some(RoundCommand::Exit));
        assert_eq!(alert.command_for(2), None);
        assert_eq!(alert.actions[0].button_style(), ButtonStyle::Secondary);
    }

    #[test]
    fn test_button_styles() {
        let menu = ButtonStyle::difficulty_menu();
        assert_eq!(menu[2], ButtonStyle::Difficulty(Difficulty::Hard));
        assert_eq!(menu[0].difficulty(), Some(Difficulty::Easy));
        assert_eq!(ButtonStyle::Warning.difficulty(), None);
        assert_eq!(ButtonStyle::from(AlertActionStyle::Destructive), ButtonStyle::Primary);
    }
}
