use core::module_path;
use function_name::named;

use super::run;

#[test]
#[named]
pub fn short_job_arrives() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(0, 8, 3), (1, 4, 2), (2, 9, 1), (3, 5, 4)],
    );
}

#[test]
#[named]
pub fn urgent_job_arrives() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(0, 7, 2), (2, 4, 2), (3, 2, 0), (5, 3, 1)],
    );
}
