use tracker_core::model::Problem;

/// One problem as shown in the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub id: String,
    pub title: String,
    pub difficulty: String,
    pub date: String,
    pub tags: String,
    pub notes: String,
}

impl From<&Problem> for ProblemRowVm {
    fn from(problem: &Problem) -> Self {
        Self {
            id: problem.id().to_string(),
            title: problem.title().to_owned(),
            difficulty: problem.difficulty().to_owned(),
            date: problem.date().to_owned(),
            tags: problem.tags().join(", "),
            notes: problem.notes().to_owned(),
        }
    }
}

#[must_use]
pub fn map_problem_rows(problems: &[Problem]) -> Vec<ProblemRowVm> {
    problems.iter().map(ProblemRowVm::from).collect()
}
