/// 输出目标是终端时以ANSI颜色包裹输出。
#[macro_export]
macro_rules! colored {
    ($color:literal, $stream:ident, $out:ident, $outln:ident, $($arg:tt)*) => {
        if std::io::IsTerminal::is_terminal(&std::io::$stream()) {
            $out!("\x1b[{}m", $color);
            $out!($($arg)*);
            $outln!("\x1b[0m");
        } else {
            $outln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! println_err {
    () => {};
    ($($arg:tt)*) => {
        $crate::colored!("1;31", stderr, eprint, eprintln, $($arg)*)
    };
}

#[macro_export]
macro_rules! println_info {
    () => {};
    ($($arg:tt)*) => {
        $crate::colored!("1;34", stdout, print, println, $($arg)*)
    };
}
