use std::io::{self, BufRead, Write};

use async_trait::async_trait;

/// Line-based operator input. The command loop only talks to this trait, so
/// tests can script a session without a terminal.
#[async_trait]
pub trait Console: Send + Sync {
    async fn read_line(&self, prompt: &str) -> io::Result<String>;
    async fn read_i32(&self, prompt: &str) -> io::Result<i32>;
    async fn read_f64(&self, prompt: &str) -> io::Result<f64>;
}

/// Real terminal input. Each read parks on the blocking pool so stream
/// output keeps flowing while the operator thinks.
pub struct StdinConsole;

fn prompt_line(prompt: &str) -> io::Result<String> {
    let mut out = io::stdout();
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[async_trait]
impl Console for StdinConsole {
    async fn read_line(&self, prompt: &str) -> io::Result<String> {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || prompt_line(&prompt))
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
    }

    // Numeric prompts re-ask until the line parses; malformed input never
    // escapes this module.
    async fn read_i32(&self, prompt: &str) -> io::Result<i32> {
        loop {
            let line = self.read_line(prompt).await?;
            match line.parse() {
                Ok(v) => return Ok(v),
                Err(_) => println!("expected an integer"),
            }
        }
    }

    async fn read_f64(&self, prompt: &str) -> io::Result<f64> {
        loop {
            let line = self.read_line(prompt).await?;
            match line.parse() {
                Ok(v) => return Ok(v),
                Err(_) => println!("expected a number"),
            }
        }
    }
}
