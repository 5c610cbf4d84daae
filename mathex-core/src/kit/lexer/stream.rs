//! 线程化的 token 流
//!
//! 把 [`Lexer`] 移到工作线程，通过有界通道逐个交付 token。
//! 通道容量至少为 1；消费端丢弃后，生产端在下一次发送时停止。

use std::sync::mpsc::{sync_channel, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use super::error::LexerError;
use super::lexer::Lexer;
use super::token::Token;
use super::TARGET;

impl Lexer {
    /// 在工作线程上运行，返回有界的 token 流
    pub fn spawn(mut self, capacity: usize) -> TokenStream {
        let capacity = capacity.max(1);
        let input = self.shared_input();
        let (sender, receiver) = sync_channel(capacity);
        debug!(target: TARGET, capacity, "Spawning lexer worker");

        let worker = thread::spawn(move || {
            while let Some(token) = self.next_token() {
                if sender.send(token).is_err() {
                    trace!(target: TARGET, "Token consumer dropped, stopping worker");
                    break;
                }
            }
            self.take_error()
        });

        TokenStream {
            receiver,
            worker,
            input,
            error_delivered: false,
        }
    }
}

/// 有界、有序、单生产者单消费者的 token 流
#[derive(Debug)]
pub struct TokenStream {
    receiver: Receiver<Token>,
    worker: JoinHandle<Option<LexerError>>,
    input: Arc<str>,
    /// 消费端是否已收到错误 token
    error_delivered: bool,
}

impl TokenStream {
    /// 原始输入
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 阻塞等待下一个 token；流关闭后返回 `None`
    pub fn recv(&mut self) -> Option<Token> {
        let token = self.receiver.recv().ok()?;
        if token.is_error() {
            self.error_delivered = true;
        }
        Some(token)
    }

    /// 关闭流并等待工作线程结束
    ///
    /// 只有消费端已收到错误 token 时才返回该错误；工作线程先行
    /// 发现、但尚未交付的错误不算，与拉取模式一致。
    pub fn finish(self) -> Result<(), LexerError> {
        let TokenStream {
            receiver,
            worker,
            error_delivered,
            ..
        } = self;
        drop(receiver);
        match worker.join() {
            Ok(Some(error)) if error_delivered => Err(error),
            Ok(_) => Ok(()),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.recv()
    }
}
