use futures::future::try_join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// 限制并发数地执行一组可失败的future，结果顺序与输入顺序一致
///
/// 任一future返回错误时立即返回该错误，尚未开始的任务不再执行。
pub async fn do_parallel_with_limit<F, T, E>(
    futures: Vec<F>,
    max_concurrent: usize,
) -> Result<Vec<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));

    let controlled = futures.into_iter().map(|fut| {
        let semaphore = semaphore.clone();
        async move {
            // semaphore 不会被关闭，acquire 只在关闭时失败
            let _permit = semaphore.acquire().await;
            fut.await
        }
    });

    try_join_all(controlled).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_results_keep_input_order() {
        let futures: Vec<_> = (0..5u64)
            .map(|i| async move {
                // 越靠前的任务越晚完成
                tokio::time::sleep(Duration::from_millis(50 - i * 10)).await;
                Ok::<_, String>(i)
            })
            .collect();

        let results = do_parallel_with_limit(futures, 5).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let futures: Vec<_> = (0..6)
            .map(|_| {
                let running = running.clone();
                let peak = peak.clone();
                async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                    Ok::<_, String>(())
                }
            })
            .collect();

        do_parallel_with_limit(futures, 2).await.unwrap();
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_zero_limit_still_runs() {
        let futures: Vec<_> = (0..3).map(|i| async move { Ok::<_, String>(i * 2) }).collect();
        assert_eq!(do_parallel_with_limit(futures, 0).await.unwrap(), vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn test_first_error_stops_pending_tasks() {
        let started = Arc::new(AtomicUsize::new(0));

        let futures: Vec<_> = (0..5)
            .map(|i| {
                let started = started.clone();
                async move {
                    started.fetch_add(1, Ordering::SeqCst);
                    if i == 0 {
                        Err(format!("task {} failed", i))
                    } else {
                        Ok(i)
                    }
                }
            })
            .collect();

        let err = do_parallel_with_limit(futures, 1).await.unwrap_err();
        assert_eq!(err, "task 0 failed");
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }
}
