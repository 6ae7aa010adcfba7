use std::io::{self, Write};

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::client::{BotClient, ChatSession};

// Print the reply as it streams in and record it in the session
async fn stream_reply(client: &BotClient, session: &mut ChatSession, history: Vec<String>) {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let request = client.stream_reply(&history, tx);
    let render = async {
        let mut stdout = io::stdout();
        while let Some(fragment) = rx.recv().await {
            print!("{}", fragment);
            let _ = stdout.flush();
            session.append(&fragment);
        }
    };

    let (result, ()) = tokio::join!(request, render);
    println!();
    session.finish();

    if let Err(err) = result {
        println!("Error: {:?}", err);
    }
}

pub async fn run(url: String) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let client = BotClient::new(&url);
    let mut session = ChatSession::new();

    // The opening reply is requested right away, same as the page
    if let Some(history) = session.begin_reply() {
        stream_reply(&client, &mut session, history).await;
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if let Some(history) = session.submit(&line) {
                    let _ = rl.add_history_entry(line.trim());
                    stream_reply(&client, &mut session, history).await;
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
