#[cfg(test)]
mod common;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod fixtures_tests;

#[cfg(test)]
mod logbook_workflow_tests;

#[cfg(test)]
mod internship_flow_tests;

#[cfg(test)]
mod publication_flow_tests;

#[cfg(test)]
mod report_flow_tests;

#[cfg(test)]
mod notification_tests;

#[cfg(test)]
mod mentorship_flow_tests;

#[cfg(test)]
mod portal_edit_tests;
