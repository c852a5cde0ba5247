#[macro_export]
macro_rules! unwrap_or_return {
    ($res: expr, $code: expr) => {
        match $res {
            Some(v) => v,
            None => return $code,
        }
    };
}

#[macro_export]
macro_rules! read_lock_or_return {
    ($tag: expr, $lock:expr, $code: expr) => {
        match $lock.try_read_for(std::time::Duration::from_secs(5)) {
            Some(data) => data,
            None => {
                $crate::log_e!($tag, "Failed to acquire read lock");
                return $code;
            }
        }
    };
}

#[macro_export]
macro_rules! write_lock_or_return {
    ($tag: expr, $lock:expr, $code: expr) => {
        match $lock.try_write_for(std::time::Duration::from_secs(5)) {
            Some(data) => data,
            None => {
                $crate::log_e!($tag, "Failed to acquire write lock");
                return $code;
            }
        }
    };
}

#[macro_export]
macro_rules! write_lock_or_noop {
    ($tag: expr, $lock:expr) => {
        match $lock.try_write_for(std::time::Duration::from_secs(5)) {
            Some(data) => data,
            None => {
                $crate::log_e!($tag, "Failed to acquire write lock");
                return;
            }
        }
    };
}
