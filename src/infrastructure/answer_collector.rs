//! 答案采集器 - 基础设施层
//!
//! 持有共享的输入流，只暴露"在时限内读一行"的能力

use crate::error::InputError;
use crate::models::answer::AnswerOutcome;
use std::future::Future;
use std::io::{BufRead, BufReader};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// 答案来源
///
/// 每次调用只产生一个结果；上一次调用返回之前不能再次调用
pub trait AnswerSource {
    fn collect(&mut self, deadline: Duration) -> impl Future<Output = AnswerOutcome> + Send;
}

type SharedReader = Arc<Mutex<Box<dyn BufRead + Send>>>;

/// 答案采集器
///
/// 职责：
/// - 持有唯一的输入流
/// - 每次采集启动一个独立的读取线程，调用方只等待到时限为止
/// - 超时后放弃读取线程，不等待它结束，也不阻止进程退出
///
/// 被放弃的线程如果之后读到了一行，这一行会被直接丢弃，不会留给下一道题
pub struct AnswerCollector {
    reader: SharedReader,
}

impl AnswerCollector {
    /// 使用任意输入流创建采集器
    pub fn new<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            reader: Arc::new(Mutex::new(Box::new(reader))),
        }
    }

    /// 使用标准输入创建采集器
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }

    /// 不限时读取一行
    pub async fn read_line(&mut self) -> Result<String, InputError> {
        self.spawn_reader()
            .await
            .unwrap_or_else(|_| Err(InputError::WorkerLost))
    }

    /// 在时限内读取一行
    pub async fn collect(&mut self, deadline: Duration) -> AnswerOutcome {
        let receiver = self.spawn_reader();

        match tokio::time::timeout(deadline, receiver).await {
            Ok(Ok(Ok(line))) => AnswerOutcome::Answered(line),
            Ok(Ok(Err(e))) => {
                debug!("读取输入失败: {}", e);
                AnswerOutcome::AcquisitionFailed(e.to_string())
            }
            Ok(Err(_)) => AnswerOutcome::AcquisitionFailed(InputError::WorkerLost.to_string()),
            Err(_) => {
                // receiver 在这里被丢弃，读取线程发送时会发现已被放弃
                debug!("等待输入超时 ({:?})，放弃读取线程", deadline);
                AnswerOutcome::TimedOut
            }
        }
    }

    /// 启动一个读取线程，结果通过 oneshot 返回
    fn spawn_reader(&self) -> oneshot::Receiver<Result<String, InputError>> {
        let (sender, receiver) = oneshot::channel();
        let reader = Arc::clone(&self.reader);

        let spawned = thread::Builder::new()
            .name("answer-reader".to_string())
            .spawn(move || {
                let result = read_one_line(&reader);
                if let Err(unclaimed) = sender.send(result) {
                    match unclaimed {
                        Ok(line) => debug!("丢弃超时后到达的输入: {:?}", line),
                        Err(e) => debug!("读取线程已被放弃: {}", e),
                    }
                }
            });

        // 线程创建失败时 sender 随闭包一起被丢弃，调用方会收到 WorkerLost
        if let Err(e) = spawned {
            warn!("无法创建读取线程: {}", e);
        }

        receiver
    }
}

impl AnswerSource for AnswerCollector {
    async fn collect(&mut self, deadline: Duration) -> AnswerOutcome {
        AnswerCollector::collect(self, deadline).await
    }
}

fn read_one_line(reader: &SharedReader) -> Result<String, InputError> {
    // 上一个被放弃的线程可能还持有锁，这里会排在它之后读取
    let mut guard = reader.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut line = String::new();
    match guard.read_line(&mut line) {
        Ok(0) => Err(InputError::StreamClosed),
        Ok(_) => Ok(line.trim().to_string()),
        Err(source) => Err(InputError::ReadFailed { source }),
    }
}
