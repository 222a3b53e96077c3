// src/debugger/macros.rs

#[macro_export]
macro_rules! vk_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::debugger::should_log($level) {
            $crate::debugger::debugger::emit($level, $component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! vk_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::vk_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vk_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::vk_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vk_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::vk_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vk_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::vk_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! vk_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::vk_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}

// Nested units log one level deeper while `$body` runs.
#[macro_export]
macro_rules! vk_scope {
    ($level:expr, $component:expr, $name:expr, $body:block) => {{
        let scoped = $crate::debugger::debugger::should_log($level);
        if scoped {
            $crate::vk_log!($level, $component, "→ {}", $name);
            $crate::debugger::debugger::indent();
        }

        let result = $body;

        if scoped {
            $crate::debugger::debugger::dedent();
            $crate::vk_log!($level, $component, "← {}", $name);
        }

        result
    }};
}
