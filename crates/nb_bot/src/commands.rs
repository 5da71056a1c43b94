use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::job::{NewsJob, RunReport};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Поприветствовать")]
    Start,
    #[command(description = "Проверить, жив ли бот")]
    Ping,
    #[command(description = "Проверить источники сейчас")]
    CheckNow,
}

pub const GREETING: &str = "Привет! Я раз в час проверяю новые новости и публикую их в канале.";
pub const PONG: &str = "Работаю ✅";
pub const CHECK_STARTED: &str = "Проверяю источники…";

pub fn check_finished(report: &RunReport) -> String {
    format!(
        "Готово ✅\nОпубликовано: {}, ошибок: {}",
        report.published, report.failed
    )
}

/// Dispatcher tree for chat commands. Expects an `Arc<NewsJob>` dependency.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer)
}

async fn answer(bot: Bot, msg: Message, cmd: Command, job: Arc<NewsJob>) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, GREETING).await?;
        }
        Command::Ping => {
            bot.send_message(msg.chat.id, PONG).await?;
        }
        Command::CheckNow => {
            bot.send_message(msg.chat.id, CHECK_STARTED).await?;
            let report = job.run_once().await;
            bot.send_message(msg.chat.id, check_finished(&report)).await?;
        }
    }
    Ok(())
}
