/// # Summary
/// 为进程安装 rustls 的 ring 加密提供者。
///
/// # Logic
/// 1. reqwest 以 `rustls-no-provider` 方式编译，必须在构建任何 HTTP 客户端前安装提供者。
/// 2. 重复调用是安全的：已安装时仅记录 debug 日志。
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }
}
