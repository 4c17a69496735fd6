#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
    /// 跳过无法读取或无法解析为数值的输入行 `--skip-err`
    SkipErr,
}

#[inline]
pub(crate) fn skip_err(configs: &[Config]) -> bool {
    configs.contains(&Config::SkipErr)
}
