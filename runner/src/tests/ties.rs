use core::module_path;
use function_name::named;

use super::run;

#[test]
#[named]
pub fn equal_remaining() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(0, 3, 1), (0, 3, 1), (1, 3, 1)],
    );
}

#[test]
#[named]
pub fn arrival_meets_expiry() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(0, 4, 1), (2, 2, 1), (2, 3, 0)],
    );
}
